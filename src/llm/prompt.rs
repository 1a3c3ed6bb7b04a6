/// Single-turn prompt: role sentence, context block, question, closing instruction.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "You are an assistant for work time tracking. Here is recent data from the database:\n\
         {context}\n\n\
         User question: {question}\n\n\
         Answer based on the data and your own knowledge."
    )
}
