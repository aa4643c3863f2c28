//! JSON-lines command channel.
//!
//! One request per line: `{"id": 1, "name": "openApp", "arguments": {...}}`
//! (`method` is accepted for `name`). One response per line:
//! `{"id": 1, "result": {"status": "success", "payload": ...}}`.
//! Requests are handled strictly in order.

use mini_launcher_bridge::{BridgeError, Command, CommandBridge, CommandResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Value,
    #[serde(alias = "method")]
    pub name: String,
    #[serde(default)]
    pub arguments: Option<mini_launcher_bridge::Arguments>,
}

impl Request {
    fn into_command(self) -> (Value, Command) {
        let command = Command {
            name: self.name,
            arguments: self.arguments,
        };
        (self.id, command)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub id: Value,
    pub result: CommandResult,
}

/// Answer a single request line.
pub async fn handle_line(bridge: &CommandBridge, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            let (id, command) = request.into_command();
            let result = bridge.dispatch(command).await;
            Response { id, result }
        }
        Err(e) => {
            warn!("Malformed request: {}", e);
            Response {
                id: Value::Null,
                result: BridgeError::Unavailable(format!("Malformed request: {e}")).into(),
            }
        }
    }
}

/// Serve requests until the reader hits EOF. Returns the number handled.
pub async fn serve<R, W>(bridge: &CommandBridge, reader: R, mut writer: W) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(bridge, line).await;
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
        handled += 1;
    }

    debug!("Input closed after {} requests", handled);
    Ok(handled)
}
