//! HTTP Transport

use crate::{
    error::{Error, Result, TransportError},
    helpers, rpc, RequestId, Transport,
};
use futures::future::BoxFuture;
use reqwest::{Client, Url};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// HTTP Transport
#[derive(Clone, Debug)]
pub struct Http {
    // Client is already an Arc so doesn't need to be part of inner.
    client: Client,
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    url: Url,
    id: AtomicUsize,
}

impl Http {
    /// Create new HTTP transport connecting to given URL.
    ///
    /// A malformed URL is reported here; an unreachable node only surfaces on the first call.
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("web3.rs")
            .build()
            .map_err(|err| Error::Transport(TransportError::Message(format!("failed to build client: {}", err))))?;
        let url = url
            .parse::<Url>()
            .map_err(|err| Error::Transport(TransportError::Message(format!("failed to parse url: {}", err))))?;
        Ok(Self::with_client(client, url))
    }

    /// Like `new` but with a user provided client instance.
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            client,
            inner: Arc::new(Inner {
                url,
                id: AtomicUsize::new(0),
            }),
        }
    }

    fn next_id(&self) -> RequestId {
        self.inner.id.fetch_add(1, Ordering::AcqRel)
    }

    fn new_request(&self) -> (Client, Url) {
        (self.client.clone(), self.inner.url.clone())
    }
}

// Id is only used for logging.
async fn execute_rpc(client: &Client, url: Url, request: &rpc::Request, id: RequestId) -> Result<rpc::Output> {
    log::debug!("[id:{}] sending request: {:?}", id, serde_json::to_string(&request)?);
    let response = client
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(|err| Error::Transport(TransportError::Message(format!("failed to send request: {}", err))))?;
    let status = response.status();
    let response = response.bytes().await.map_err(|err| {
        Error::Transport(TransportError::Message(format!(
            "failed to read response bytes: {}",
            err
        )))
    })?;
    log::debug!(
        "[id:{}] received response: {:?}",
        id,
        String::from_utf8_lossy(&response)
    );
    if !status.is_success() {
        return Err(Error::Transport(TransportError::Code(status.as_u16())));
    }
    helpers::to_output_from_slice(&response)
}

impl Transport for Http {
    type Out = BoxFuture<'static, Result<rpc::Value>>;

    fn prepare(&self, method: &str, params: Vec<rpc::Value>) -> (RequestId, rpc::Call) {
        let id = self.next_id();
        let request = helpers::build_request(id, method, params);
        (id, request)
    }

    fn send(&self, id: RequestId, call: rpc::Call) -> Self::Out {
        let (client, url) = self.new_request();
        Box::pin(async move {
            let output = execute_rpc(&client, url, &rpc::Request::Single(call), id).await?;
            helpers::to_result_from_output(output)
        })
    }
}
