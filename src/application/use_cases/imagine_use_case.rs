//! Text-to-image pipeline with bounded retry.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::dto::{ImagineOptions, ImagineOutcome, PipelineMessages};
use crate::domain::entities::{
    Attachment, CacheOrigin, GenerationRequest, OutgoingMessage, RetryState, RetryStep,
};
use crate::domain::errors::{MessageError, PipelineError};
use crate::domain::ports::{ImageGenerationPort, MessagePort, StagingPort, TranslationPort};

/// Translates a prompt, generates images, stages them and sends them back.
#[derive(Clone)]
pub struct ImagineUseCase {
    translator: Arc<dyn TranslationPort>,
    generator: Arc<dyn ImageGenerationPort>,
    staging: Arc<dyn StagingPort>,
    options: ImagineOptions,
    messages: PipelineMessages,
}

impl ImagineUseCase {
    /// Creates the use case with default options and messages.
    #[must_use]
    pub fn new(
        translator: Arc<dyn TranslationPort>,
        generator: Arc<dyn ImageGenerationPort>,
        staging: Arc<dyn StagingPort>,
    ) -> Self {
        Self {
            translator,
            generator,
            staging,
            options: ImagineOptions::default(),
            messages: PipelineMessages::default(),
        }
    }

    /// Overrides retry and naming options.
    #[must_use]
    pub fn with_options(mut self, options: ImagineOptions) -> Self {
        self.options = options;
        self
    }

    /// Overrides user-facing strings.
    #[must_use]
    pub fn with_messages(mut self, messages: PipelineMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Runs the pipeline for `args` and reports through `messenger`.
    ///
    /// # Errors
    /// Returns error only if the host fails to deliver the final message.
    pub async fn execute<S: AsRef<str> + Sync>(
        &self,
        args: &[S],
        messenger: &dyn MessagePort,
    ) -> Result<ImagineOutcome, MessageError> {
        let mut request = match GenerationRequest::from_args(args) {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "Imagine invoked without a prompt");
                messenger
                    .send(OutgoingMessage::text(&self.messages.missing_prompt))
                    .await?;
                return Ok(ImagineOutcome::MissingPrompt);
            }
        };

        let invocation = Uuid::new_v4().simple().to_string();
        let mut retry = RetryState::new(self.options.max_attempts);

        loop {
            let attempt = request.begin_attempt();

            let error = match self.attempt(&mut request, &invocation).await {
                Ok(attachments) => {
                    let images = attachments.len();
                    messenger
                        .send(
                            OutgoingMessage::text(&self.messages.generation_success)
                                .with_attachments(attachments),
                        )
                        .await?;

                    info!(attempt, images, "Images delivered");
                    return Ok(ImagineOutcome::Delivered {
                        attempts: attempt,
                        images,
                    });
                }
                Err(error) => error,
            };

            warn!(attempt, error = ?error, "Imagine attempt failed");

            let retryable = error.is_retryable();
            if retry.record_failure(error) == RetryStep::Exhausted || !retryable {
                break;
            }
        }

        let detail = retry
            .last_error()
            .map_or_else(String::new, PipelineError::user_detail);

        messenger
            .send(OutgoingMessage::text(format!(
                "{} - {detail}",
                self.messages.generation_error
            )))
            .await?;

        Ok(ImagineOutcome::Failed {
            attempts: retry.attempt(),
            detail,
        })
    }

    /// One translate → generate → stage → open pass. Either every image is
    /// staged and opened or the attempt fails.
    async fn attempt(
        &self,
        request: &mut GenerationRequest,
        invocation: &str,
    ) -> Result<Vec<Attachment>, PipelineError> {
        let translated = self.translator.translate(request.raw_prompt()).await?;
        let prompt = request.set_translated_prompt(translated);

        let images = self.generator.generate(prompt).await?;

        let mut staged = Vec::with_capacity(images.len());
        for image in &images {
            let name = self.options.staging_names.file_name(image.index, invocation);
            let file = self
                .staging
                .stage(&image.bytes, &name, CacheOrigin::Generation)
                .await?;
            staged.push(file);
        }

        let mut attachments = Vec::with_capacity(staged.len());
        for file in &staged {
            attachments.push(self.staging.open_for_send(&file.path).await?);
        }

        Ok(attachments)
    }
}
