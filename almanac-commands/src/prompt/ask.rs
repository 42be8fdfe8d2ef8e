use tracing::{error, warn};

use crate::Reply;
use crate::utility::messages::generation_failure_message;
use almanac_core::{Context, Error, SessionError};
use almanac_llm::GenerationError;

/// Submit a line as a prompt and show the reply.
///
/// Failures never abort the loop; they are logged and turned into a message.
pub async fn ask(ctx: &mut Context<'_>, line: &str) -> Result<Reply, Error> {
    match ctx.session.submit(line).await {
        Ok(result) => Ok(Reply::Text(result.response)),
        Err(SessionError::EmptyPrompt) => Ok(Reply::Silent),
        Err(err) => {
            match &err {
                SessionError::Generation(GenerationError::Storage(source)) => {
                    error!(?source, "failed to read preferences for generation");
                }
                other => warn!(error = %other, "generation failed"),
            }

            Ok(Reply::Text(generation_failure_message(&err)))
        }
    }
}

#[cfg(test)]
mod tests {
    use almanac_core::Context;

    use super::ask;
    use crate::Reply;
    use crate::test_support::{memory_data, session_for};

    #[tokio::test]
    async fn blank_lines_are_ignored() {
        let data = memory_data();
        let mut session = session_for(&data);
        let mut ctx = Context {
            data: &data,
            session: &mut session,
        };

        assert_eq!(ask(&mut ctx, "   ").await.unwrap(), Reply::Silent);
    }

    #[tokio::test]
    async fn missing_key_is_explained_not_raised() {
        let data = memory_data();
        let mut session = session_for(&data);
        let mut ctx = Context {
            data: &data,
            session: &mut session,
        };

        let Reply::Text(text) = ask(&mut ctx, "hello").await.unwrap() else {
            panic!("expected text reply");
        };
        assert!(text.contains("/key"));
        assert_eq!(ctx.session.history().len(), 0);
    }
}
