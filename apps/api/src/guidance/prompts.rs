// All LLM prompt constants for the guidance module.

/// Guidance prompt template. Replace `{country}` and `{situation}` before sending.
///
/// Three-part instruction: (1) the applicable law/rule, (2) the charge/fine/
/// consequence, (3) personal next-step guidance — framed as educational,
/// non-actionable awareness material for citizens.
pub const GUIDANCE_PROMPT_TEMPLATE: &str = "You are a quick guidance for any law violation \
    or government rule break for {country} country, the information is just for education \
    and awareness purpose and accessed by citizens. Provide (1) the law mentioned in the \
    {country} government law/rule book, (2) charges/fine/actions against the guilty \
    according to the law, (3) personal advice on what to do if found guilty and how to \
    proceed further. The scenario is {situation}.";

/// Interpolates the jurisdiction and situation into the fixed template.
pub fn build_guidance_prompt(country: &str, situation: &str) -> String {
    GUIDANCE_PROMPT_TEMPLATE
        .replace("{country}", country)
        .replace("{situation}", situation)
}
