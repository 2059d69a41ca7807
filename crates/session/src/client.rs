//! Websocket session client.
//!
//! Owns the persistent connection to the broker. Lifecycle:
//! `connect` → `register` (exactly once) → `run` until the process is
//! interrupted or the broker drops the connection.
//!
//! Invocations are handled serially, in arrival order. The broker matches
//! responses by `invocation_id`, and the handler suspends on its completion
//! call, so one in-flight request at a time keeps the loop trivially
//! correct without shared state.

use fxcoach_core::error::SessionError;
use fxcoach_core::handler::{HandlerManifest, RequestHandler};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::tungstenite::Error as WsError;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use crate::protocol::{extract_question, AgentMessage, BrokerMessage};

/// Connection settings for the broker.
#[derive(Clone)]
pub struct BrokerConfig {
    /// Websocket URL of the broker's agent endpoint.
    pub url: String,
    /// Authentication token (JWT) presented at the handshake.
    pub auth_token: String,
}

impl std::fmt::Debug for BrokerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerConfig")
            .field("url", &self.url)
            .field("auth_token", &"[REDACTED]")
            .finish()
    }
}

/// A live session with the broker.
pub struct SessionClient {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
    registered: bool,
}

impl SessionClient {
    /// Open the websocket connection, authenticating with the token.
    ///
    /// Fatal on failure: the caller is expected to exit rather than retry.
    pub async fn connect(config: &BrokerConfig) -> Result<Self, SessionError> {
        let mut request = config.url.as_str().into_client_request().map_err(|e| {
            SessionError::ConnectionFailed {
                url: config.url.clone(),
                reason: e.to_string(),
            }
        })?;

        let auth_value = format!("Bearer {}", config.auth_token)
            .parse()
            .map_err(|_| SessionError::Protocol("auth token is not a valid header value".into()))?;
        request.headers_mut().insert("Authorization", auth_value);

        let (ws, _) = connect_async(request).await.map_err(|e| match e {
            WsError::Http(response)
                if response.status().as_u16() == 401 || response.status().as_u16() == 403 =>
            {
                SessionError::AuthFailed(format!(
                    "broker rejected credentials (status {})",
                    response.status()
                ))
            }
            other => SessionError::ConnectionFailed {
                url: config.url.clone(),
                reason: other.to_string(),
            },
        })?;

        info!(url = %config.url, "Connected to broker");

        Ok(Self {
            ws,
            registered: false,
        })
    }

    /// Register a handler with the broker and await the acknowledgement.
    ///
    /// May be called at most once per session.
    pub async fn register(&mut self, manifest: &HandlerManifest) -> Result<(), SessionError> {
        if self.registered {
            return Err(SessionError::Protocol(
                "handler is already registered on this session".into(),
            ));
        }

        self.send(&AgentMessage::Register {
            name: manifest.name.clone(),
            description: manifest.description.clone(),
            parameters: manifest.parameters.clone(),
        })
        .await?;

        loop {
            match self.next_message().await? {
                BrokerMessage::Registered { agent_id } => {
                    info!(name = %manifest.name, agent_id = %agent_id, "Handler registered");
                    self.registered = true;
                    return Ok(());
                }
                BrokerMessage::Error { message } => {
                    return Err(SessionError::RegistrationRejected(message));
                }
                BrokerMessage::Ping => self.send(&AgentMessage::Pong).await?,
                BrokerMessage::Invoke { invocation_id, .. } => {
                    return Err(SessionError::Protocol(format!(
                        "received invoke {invocation_id} before registration was acknowledged"
                    )));
                }
            }
        }
    }

    /// Dispatch invocations to the handler until the connection ends.
    ///
    /// Every invoke produces exactly one result frame: the handler's
    /// contract guarantees a string even when generation fails.
    pub async fn run<H>(&mut self, handler: &H) -> Result<(), SessionError>
    where
        H: RequestHandler + ?Sized,
    {
        if !self.registered {
            return Err(SessionError::Protocol(
                "run() called before register()".into(),
            ));
        }

        loop {
            match self.next_message().await? {
                BrokerMessage::Invoke {
                    invocation_id,
                    input,
                } => {
                    let question = extract_question(&input);
                    debug!(invocation_id = %invocation_id, question_len = question.len(), "Handling invocation");
                    let output = handler.handle(&question).await;
                    self.send(&AgentMessage::InvokeResult {
                        invocation_id,
                        output,
                    })
                    .await?;
                }
                BrokerMessage::Ping => self.send(&AgentMessage::Pong).await?,
                BrokerMessage::Error { message } => {
                    warn!(message = %message, "Broker reported an error");
                }
                BrokerMessage::Registered { agent_id } => {
                    debug!(agent_id = %agent_id, "Ignoring duplicate registration ack");
                }
            }
        }
    }

    async fn send(&mut self, msg: &AgentMessage) -> Result<(), SessionError> {
        let json =
            serde_json::to_string(msg).map_err(|e| SessionError::Protocol(e.to_string()))?;
        self.ws
            .send(WsMessage::Text(json))
            .await
            .map_err(|e| SessionError::ConnectionLost(e.to_string()))
    }

    /// Read frames until the next parseable broker message.
    ///
    /// Unparseable text frames are logged and skipped; a close frame or a
    /// transport error ends the session.
    async fn next_message(&mut self) -> Result<BrokerMessage, SessionError> {
        loop {
            let frame = self
                .ws
                .next()
                .await
                .ok_or_else(|| SessionError::ConnectionLost("stream ended".into()))?
                .map_err(|e| SessionError::ConnectionLost(e.to_string()))?;

            let text = match frame {
                WsMessage::Text(text) => text,
                WsMessage::Binary(data) => match String::from_utf8(data) {
                    Ok(s) => s,
                    Err(_) => {
                        warn!("Ignoring non-UTF-8 binary frame from broker");
                        continue;
                    }
                },
                WsMessage::Close(_) => {
                    return Err(SessionError::ConnectionLost("closed by broker".into()));
                }
                // Protocol-level ping/pong is handled by the transport.
                _ => continue,
            };

            match serde_json::from_str::<BrokerMessage>(&text) {
                Ok(msg) => return Ok(msg),
                Err(e) => {
                    warn!(error = %e, "Ignoring invalid broker message");
                }
            }
        }
    }
}
