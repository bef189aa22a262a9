// Career counselor chat: context reconstruction, prompts, session history.
// All generation goes through llm_client; nothing here calls the API directly.

pub mod context;
pub mod handlers;
pub mod models;
pub mod prompts;
