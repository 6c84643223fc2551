// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kubernetes transport: exec-over-API-server into pod containers.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, AttachParams};
use kube::Client;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::target::TargetContainer;
use crate::transport::{OutputBuffer, Transport, TransportError};

const ENV_NAMESPACE: &str = "BRIX_KUBE_NAMESPACE";

/// Connection settings for the control plane.
///
/// Everything else (API host, auth, certificates) comes from the ambient
/// kubeconfig or in-cluster environment.
#[derive(Debug, Clone, Default)]
pub struct KubeConfig {
    /// Namespace the storage pods live in. Required.
    pub namespace: String,
}

impl KubeConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Apply `BRIX_KUBE_NAMESPACE` over the configured value.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(ns) = std::env::var(ENV_NAMESPACE) {
            if !ns.is_empty() {
                self.namespace = ns;
            }
        }
        self
    }
}

/// An authenticated connection to the control plane.
///
/// Owned by the caller and shared by reference with the executor; the
/// executor never reconnects or retries on its behalf.
#[derive(Clone)]
pub struct KubeConn {
    client: Client,
    namespace: String,
}

impl std::fmt::Debug for KubeConn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeConn")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl KubeConn {
    /// Connect using the ambient kubeconfig or in-cluster environment.
    pub async fn connect(config: KubeConfig) -> Result<Self, TransportError> {
        if config.namespace.is_empty() {
            return Err(TransportError::Config(
                "namespace must be provided".to_string(),
            ));
        }
        let client = Client::try_default()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        Ok(Self {
            client,
            namespace: config.namespace,
        })
    }

    /// Wrap an already-built client (custom auth chains, mock API servers).
    pub fn from_client(client: Client, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Target a container of a pod in this connection's namespace.
    pub fn target(
        &self,
        pod_name: impl Into<String>,
        container: impl Into<String>,
    ) -> TargetContainer {
        TargetContainer::new(&self.namespace, pod_name, container)
    }
}

#[async_trait]
impl Transport for KubeConn {
    async fn exec(
        &self,
        target: &TargetContainer,
        command: Vec<String>,
        stdout: OutputBuffer,
        stderr: OutputBuffer,
    ) -> Result<(), TransportError> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), &target.namespace);
        let params = AttachParams::default()
            .container(target.container.clone())
            .stdin(false)
            .stdout(true)
            .stderr(true);

        let mut session = pods
            .exec(&target.pod_name, command, &params)
            .await
            .map_err(|e| {
                tracing::debug!(%target, error = %e, "exec session failed to open");
                TransportError::Session(target.pod_name.clone())
            })?;

        let out = session.stdout();
        let err = session.stderr();
        let status = session.take_status();

        tokio::join!(pump(out, &stdout), pump(err, &stderr));

        let status = match status {
            Some(fut) => fut.await,
            None => None,
        };
        session
            .join()
            .await
            .map_err(|e| TransportError::Failed(e.to_string()))?;

        match status {
            Some(s) if s.status.as_deref() == Some("Success") => Ok(()),
            Some(s) => {
                let msg = s
                    .message
                    .or(s.reason)
                    .unwrap_or_else(|| "command failed".to_string());
                Err(TransportError::Failed(msg))
            }
            // No status frame means the stream closed clean.
            None => Ok(()),
        }
    }
}

/// Drain one attached stream into its capture buffer.
///
/// Read errors are not surfaced here: a broken stream also fails the
/// session's status/join path, which is where the error is reported.
async fn pump<R>(reader: Option<R>, sink: &OutputBuffer)
where
    R: AsyncRead + Unpin,
{
    let Some(mut reader) = reader else { return };
    let mut chunk = [0u8; 4096];
    loop {
        match reader.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => sink.write(&chunk[..n]),
        }
    }
}

#[cfg(test)]
#[path = "k8s_tests.rs"]
mod tests;
