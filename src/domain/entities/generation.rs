//! Text-to-image request and output entities.

use bytes::Bytes;

use crate::domain::errors::PipelineError;

/// A single user invocation of the imagine pipeline.
///
/// The raw prompt is fixed for the lifetime of the request; the translated
/// prompt is replaced on every attempt because translation is re-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    raw_prompt: String,
    translated_prompt: Option<String>,
    attempt_count: u32,
}

impl GenerationRequest {
    /// Builds a request from command arguments joined by single spaces.
    ///
    /// # Errors
    /// Returns [`PipelineError::MissingPrompt`] when the joined prompt is blank.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, PipelineError> {
        let raw_prompt = args
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        if raw_prompt.trim().is_empty() {
            return Err(PipelineError::MissingPrompt);
        }

        Ok(Self {
            raw_prompt,
            translated_prompt: None,
            attempt_count: 0,
        })
    }

    /// Returns the prompt as typed by the user.
    #[must_use]
    pub fn raw_prompt(&self) -> &str {
        &self.raw_prompt
    }

    /// Returns the English prompt from the latest attempt, if any.
    #[must_use]
    pub fn translated_prompt(&self) -> Option<&str> {
        self.translated_prompt.as_deref()
    }

    /// Records the translation for the current attempt.
    pub fn set_translated_prompt(&mut self, prompt: String) -> &str {
        self.translated_prompt.insert(prompt)
    }

    /// Number of attempts started so far.
    #[must_use]
    pub const fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Marks the start of a new attempt and clears the stale translation.
    pub fn begin_attempt(&mut self) -> u32 {
        self.attempt_count += 1;
        self.translated_prompt = None;
        self.attempt_count
    }
}

/// One image returned by the generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Position in the backend response.
    pub index: usize,
    /// Raw image bytes.
    pub bytes: Bytes,
}

impl GeneratedImage {
    /// Creates a generated image.
    #[must_use]
    pub fn new(index: usize, bytes: impl Into<Bytes>) -> Self {
        Self {
            index,
            bytes: bytes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_joined_with_spaces() {
        let request = GenerationRequest::from_args(&["a", "red", "fox"]).unwrap();
        assert_eq!(request.raw_prompt(), "a red fox");
        assert_eq!(request.attempt_count(), 0);
        assert!(request.translated_prompt().is_none());
    }

    #[test]
    fn test_empty_args_are_missing_prompt() {
        let args: [&str; 0] = [];
        assert!(matches!(
            GenerationRequest::from_args(&args),
            Err(PipelineError::MissingPrompt)
        ));
        assert!(matches!(
            GenerationRequest::from_args(&["  ", ""]),
            Err(PipelineError::MissingPrompt)
        ));
    }

    #[test]
    fn test_begin_attempt_resets_translation() {
        let mut request = GenerationRequest::from_args(&["gato"]).unwrap();
        request.begin_attempt();
        request.set_translated_prompt("cat".to_string());
        assert_eq!(request.translated_prompt(), Some("cat"));

        assert_eq!(request.begin_attempt(), 2);
        assert!(request.translated_prompt().is_none());
    }
}
