//! Shared utilities for integration testing.
//!
//! Provides a programmable mock JSON-RPC node that answers both the standard
//! chain methods and the confidentiality service methods, records every call,
//! and can be told to fail specific methods.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use alloy::primitives::{keccak256, Bytes, B256};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Shielding applied by the mock: a 4-byte tag followed by the payload with
/// every byte inverted. Distinct from the plaintext at every position.
pub fn mock_shield(plaintext: &[u8]) -> Vec<u8> {
    let mut out = vec![0x5a, 0x5a, 0x5a, 0x5a];
    out.extend(plaintext.iter().map(|b| !b));
    out
}

struct MockState {
    chain_id: u64,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<String>>,
    raw_txs: Mutex<Vec<Bytes>>,
    last_tx_hash: Mutex<Option<B256>>,
    revert: Mutex<bool>,
}

/// Handle to a running mock node.
pub struct MockNode {
    state: Arc<MockState>,
    url: String,
}

impl MockNode {
    /// Start a mock node on an ephemeral port.
    pub async fn start(chain_id: u64) -> Self {
        let state = Arc::new(MockState {
            chain_id,
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            raw_txs: Mutex::new(Vec::new()),
            last_tx_hash: Mutex::new(None),
            revert: Mutex::new(false),
        });

        let app = Router::new()
            .route("/", post(handle_rpc))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            state,
            url: format!("http://{}", addr),
        }
    }

    /// Endpoint URL to point the clients at.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make the given method return a JSON-RPC error from now on.
    pub fn fail(&self, method: &str) {
        self.state.failing.lock().unwrap().insert(method.to_string());
    }

    /// Serve receipts with a reverted status from now on.
    pub fn revert_transactions(&self) {
        *self.state.revert.lock().unwrap() = true;
    }

    /// Methods called so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.calls.lock().unwrap().clone()
    }

    /// Number of calls to a specific method.
    pub fn call_count(&self, method: &str) -> usize {
        self.calls().iter().filter(|m| *m == method).count()
    }

    /// Raw transactions the node accepted.
    pub fn raw_txs(&self) -> Vec<Bytes> {
        self.state.raw_txs.lock().unwrap().clone()
    }
}

async fn handle_rpc(State(state): State<Arc<MockState>>, Json(req): Json<Value>) -> Json<Value> {
    let method = req["method"].as_str().unwrap_or_default().to_string();
    let id = req["id"].clone();
    state.calls.lock().unwrap().push(method.clone());

    if state.failing.lock().unwrap().contains(&method) {
        return Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32000, "message": "injected failure" },
        }));
    }

    let result = match method.as_str() {
        "eth_chainId" => json!(format!("0x{:x}", state.chain_id)),
        "eth_blockNumber" => json!("0x5"),
        "eth_getTransactionCount" => json!("0x0"),
        "eth_gasPrice" => json!("0x3b9aca00"), // 1 gwei
        "eth_sendRawTransaction" => {
            let raw: Bytes = serde_json::from_value(req["params"][0].clone()).unwrap();
            let hash = keccak256(&raw);
            state.raw_txs.lock().unwrap().push(raw);
            *state.last_tx_hash.lock().unwrap() = Some(hash);
            json!(hash)
        }
        "eth_getTransactionReceipt" => {
            let status = if *state.revert.lock().unwrap() { "0x0" } else { "0x1" };
            let hash = state.last_tx_hash.lock().unwrap();
            match *hash {
                Some(h) => json!({
                    "type": "0x0",
                    "transactionHash": h,
                    "transactionIndex": "0x0",
                    "blockHash": format!("0x{}", "11".repeat(32)),
                    "blockNumber": "0x2",
                    "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
                    "to": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
                    "contractAddress": null,
                    "gasUsed": "0x5208",
                    "cumulativeGasUsed": "0x5208",
                    "effectiveGasPrice": "0x3b9aca00",
                    "status": status,
                    "logs": [],
                    "logsBloom": format!("0x{}", "00".repeat(256)),
                }),
                None => Value::Null,
            }
        }
        "shield_encryptCallData" => {
            let plaintext: Bytes = serde_json::from_value(req["params"][0].clone()).unwrap();
            json!(Bytes::from(mock_shield(&plaintext)))
        }
        "shield_decryptNodeResponse" => {
            let encrypted: Bytes = serde_json::from_value(req["params"][0].clone()).unwrap();
            // Inverse of mock_shield: strip the tag, invert back
            let plaintext: Vec<u8> = encrypted[4..].iter().map(|b| !b).collect();
            json!(Bytes::from(plaintext))
        }
        _ => Value::Null,
    };

    Json(json!({ "jsonrpc": "2.0", "id": id, "result": result }))
}
