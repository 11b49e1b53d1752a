use crate::core::settlement::settle;
use crate::domain::ports::Console;
use crate::utils::error::{DemoError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

pub type CloseHook = Box<dyn FnOnce() + Send + 'static>;

pub type StdioSession = PromptSession<BufReader<Stdin>, Stdout>;

/// An interactive question/answer session over a line reader and a writer.
///
/// The session owns both streams and releases them exactly once: on
/// [`PromptSession::close`] or, failing that, on drop.
pub struct PromptSession<R, W> {
    io: Option<(R, W)>,
    on_close: Option<CloseHook>,
}

impl StdioSession {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> PromptSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Some((reader, writer)),
            on_close: None,
        }
    }

    /// Registers a callback fired when the streams are released.
    pub fn with_close_hook(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }

    pub fn is_closed(&self) -> bool {
        self.io.is_none()
    }

    /// Releases the streams. Later calls are no-ops.
    pub fn close(&mut self) {
        if let Some(io) = self.io.take() {
            drop(io);
            if let Some(hook) = self.on_close.take() {
                hook();
            }
            tracing::debug!("Prompt session closed");
        }
    }
}

impl<R, W> PromptSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Writes `question` and waits for one line of input.
    ///
    /// Settles with the line minus its terminator; an empty line is a valid
    /// answer. End of input before any text is [`DemoError::InputClosed`].
    pub async fn ask(&mut self, question: &str) -> Result<String> {
        let (reader, writer) = self.io.as_mut().ok_or(DemoError::SessionClosed)?;

        writer.write_all(question.as_bytes()).await?;
        writer.flush().await?;

        let mut answer = String::new();
        if reader.read_line(&mut answer).await? == 0 {
            return Err(DemoError::InputClosed);
        }
        let trimmed = answer.trim_end_matches(['\n', '\r']).len();
        answer.truncate(trimmed);
        Ok(answer)
    }
}

impl<R, W> Drop for PromptSession<R, W> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Asks `question`, thanks the user or shrugs it off, then says goodbye and
/// closes the session on every path.
pub async fn ask_time<R, W>(mut session: PromptSession<R, W>, console: &dyn Console, question: &str)
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let answer = session.ask(question).await;
    settle(
        std::future::ready(answer),
        |answer| {
            tracing::debug!("Received answer: {:?}", answer);
            console.log("Thanks!");
        },
        |e| {
            tracing::debug!("No answer: {}", e);
            console.log("No problem.");
        },
        || {
            console.log("See you next time");
            session.close();
        },
    )
    .await;
}
