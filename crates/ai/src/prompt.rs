use crate::digest::ContextDigest;

/// Wrap the user's question and the data digest in the analyst instructions
/// sent to a generative backend.
pub fn build_prompt(query: &str, digest: &ContextDigest) -> String {
    format!(
        "You are an advanced AI Business Automation Assistant \
         for a Proprietary Trading Company (Pharma & Equipment).\n\
         You have access to the company's live ERP data.\n\
         \n\
         Current Data Snapshot:\n\
         {snapshot}\n\
         \n\
         Your Role:\n\
         1. Answer the User's question specifically acting as a business analyst.\n\
         2. Provide data-backed insights.\n\
         3. Suggest actionable next steps.\n\
         4. Keep responses concise and professional (ERP style).\n\
         \n\
         User Query: {query}",
        snapshot = digest.render(),
        query = query.trim(),
    )
}
