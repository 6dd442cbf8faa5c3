//! Per-socket read loop: decode each inbound frame, route it, and reply.
//! Errors never tear down the connection or any other connection; a
//! socket read/write failure just ends this one loop.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;

use crate::error::NetError;
use crate::feedback;
use crate::router::Router;

pub async fn handle_connection(stream: TcpStream, router: &Router) {
    let peer = stream.peer_addr().ok();
    let websocket = match tokio_tungstenite::accept_async(stream).await {
        Ok(ws) => ws,
        Err(error) => {
            tracing::warn!(?peer, %error, "websocket handshake failed");
            return;
        }
    };
    run(websocket, router).await;
    tracing::debug!(?peer, "connection closed");
}

async fn run(websocket: WebSocketStream<TcpStream>, router: &Router) {
    let (mut sink, mut stream) = websocket.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<String>();

    let writer = tokio::spawn(async move {
        while let Some(text) = outbound_rx.recv().await {
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(message) = stream.next().await {
        let message = match message {
            Ok(m) => m,
            Err(error) => {
                tracing::debug!(%error, "socket read unsuccessful, closing");
                break;
            }
        };
        let text = match message {
            Message::Text(t) => t.to_string(),
            Message::Binary(bytes) => match String::from_utf8(bytes.to_vec()) {
                Ok(t) => t,
                Err(_) => {
                    send(&outbound_tx, feedback::error(NetError::DataEncodingInvalid.to_string()));
                    continue;
                }
            },
            Message::Close(_) => break,
            _ => continue,
        };

        let now = chrono::Utc::now();
        let reply = match crate::serialization::decode_event(&text, now) {
            Ok(event) => router.route(event, outbound_tx.clone()).await,
            Err(error) => Err(error),
        };

        match reply {
            Ok(feedback) => send(&outbound_tx, feedback),
            Err(error) => {
                tracing::debug!(%error, "event processing failed");
                send(&outbound_tx, feedback::error(error.to_string()));
            }
        }
    }

    drop(outbound_tx);
    let _ = writer.await;
}

fn send(tx: &mpsc::UnboundedSender<String>, message: String) {
    let _ = tx.send(message);
}
