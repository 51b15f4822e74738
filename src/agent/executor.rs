//! LLM execution trait behind which inference backends live.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::Result;

/// Trait for LLM execution.
///
/// Takes an agent system prompt plus a task message and returns the raw text
/// response. Object-safe so crews can hold `Arc<dyn LlmExecutor>`.
pub trait LlmExecutor: Send + Sync {
    fn execute<'a>(
        &'a self,
        system_prompt: &'a str,
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// Blanket implementation for Arc-wrapped executors.
impl<E: LlmExecutor + ?Sized> LlmExecutor for Arc<E> {
    fn execute<'a>(
        &'a self,
        system_prompt: &'a str,
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        (**self).execute(system_prompt, message)
    }
}
