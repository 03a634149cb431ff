/// Outbound email is an external collaborator; the API only depends on this
/// contract. Delivery is fire-and-forget: a failure surfaces as a 500 to the
/// submitter and is never queued or retried.
pub trait Mailer: Send + Sync {
    fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Default transport: logs the message. Deployments wire a real transport in
/// its place.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        tracing::info!(to, subject, body_len = body.len(), "outbound mail");
        Ok(())
    }
}
