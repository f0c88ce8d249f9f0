//! Prompt construction for company-profile drafting.

/// What is known about a company when asking for draft copy.
#[derive(Debug, Clone, Default)]
pub struct CompanyContext<'a> {
    pub website_url: &'a str,
    pub company_name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub use_case: Option<&'a str>,
}

impl CompanyContext<'_> {
    fn preamble(&self) -> String {
        let mut out = format!("Based on the website {}", self.website_url);
        if let Some(name) = self.company_name.filter(|s| !s.is_empty()) {
            out.push_str(&format!(" (Company: {name})"));
        }
        if let Some(desc) = self.description.filter(|s| !s.is_empty()) {
            out.push_str(&format!("\nDescription: {desc}"));
        }
        out
    }
}

/// Prompt for a 2-3 sentence use-case description.
pub fn use_case_prompt(ctx: &CompanyContext<'_>) -> String {
    format!(
        "{}, generate a concise use case description (2-3 sentences) that explains what this \
         SaaS product is for and who should use it. Focus on the primary use case and target \
         audience. Be specific and professional.",
        ctx.preamble()
    )
}

/// Prompt for a 1-2 sentence interesting fact about the company.
pub fn interesting_fact_prompt(ctx: &CompanyContext<'_>) -> String {
    let mut preamble = ctx.preamble();
    if let Some(use_case) = ctx.use_case.filter(|s| !s.is_empty()) {
        preamble.push_str(&format!("\nUse Case: {use_case}"));
    }
    format!(
        "{preamble}, generate an interesting, unique, or surprising fact about this company or \
         product (1-2 sentences). This should be something that makes the company stand out - \
         could be about their origin story, unique approach, notable achievement, innovative \
         feature, or market position. Make it engaging and memorable."
    )
}
