//! Chromium-backed implementation of the port traits.

use std::sync::Arc;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::AdapterConfig;
use crate::error::{AdapterError, AdapterErrorKind};
use crate::port::{BrowserHandle, BrowserPort, PageHandle};

/// Launches Chromium via the DevTools protocol.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChromiumPort;

impl ChromiumPort {
    pub fn new() -> Self {
        Self
    }

    fn browser_config(config: &AdapterConfig) -> Result<BrowserConfig, AdapterError> {
        let mut builder = BrowserConfig::builder();
        if let Some(executable) = &config.executable {
            builder = builder.chrome_executable(executable);
        }
        if let Some(dir) = &config.user_data_dir {
            builder = builder.user_data_dir(dir);
        }
        if config.no_sandbox {
            builder = builder.no_sandbox();
        }
        if !config.headless {
            builder = builder.with_head();
        }
        builder
            .build()
            .map_err(|msg| AdapterError::new(AdapterErrorKind::LaunchFailed).with_hint(msg))
    }
}

#[async_trait]
impl BrowserPort for ChromiumPort {
    async fn launch(&self, config: &AdapterConfig) -> Result<Box<dyn BrowserHandle>, AdapterError> {
        let browser_config = Self::browser_config(config)?;
        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|err| {
            AdapterError::new(AdapterErrorKind::LaunchFailed).with_hint(err.to_string())
        })?;

        // The handler stream must be drained for the CDP connection to make
        // progress; it ends when the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
            debug!(target: "browser-adapter", "cdp handler stream ended");
        });

        info!(
            target: "browser-adapter",
            headless = config.headless,
            "chromium launched"
        );

        Ok(Box::new(ChromiumBrowser {
            browser,
            handler_task,
        }))
    }
}

/// Owned Chromium process plus the task draining its CDP event stream.
pub struct ChromiumBrowser {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

#[async_trait]
impl BrowserHandle for ChromiumBrowser {
    async fn new_page(&self) -> Result<Arc<dyn PageHandle>, AdapterError> {
        let page = self.browser.new_page("about:blank").await.map_err(|err| {
            AdapterError::new(AdapterErrorKind::LaunchFailed).with_hint(err.to_string())
        })?;
        Ok(Arc::new(ChromiumPage { page }))
    }

    async fn close(&mut self) -> Result<(), AdapterError> {
        let closed = self.browser.close().await;
        match closed {
            Ok(_) => {
                let _ = self.browser.wait().await;
                self.handler_task.abort();
                info!(target: "browser-adapter", "chromium closed");
                Ok(())
            }
            Err(err) => {
                warn!(
                    target: "browser-adapter",
                    %err,
                    "graceful close failed; killing browser process"
                );
                let _ = self.browser.kill().await;
                self.handler_task.abort();
                Err(AdapterError::new(AdapterErrorKind::Internal).with_hint(err.to_string()))
            }
        }
    }
}

/// A navigated Chromium tab.
pub struct ChromiumPage {
    page: Page,
}

#[async_trait]
impl PageHandle for ChromiumPage {
    async fn goto(&self, url: &str) -> Result<(), AdapterError> {
        self.page
            .goto(url)
            .await
            .map(|_| ())
            .map_err(|err| AdapterError::new(AdapterErrorKind::NavFailed).with_hint(err.to_string()))
    }

    async fn evaluate(&self, expression: &str) -> Result<Value, AdapterError> {
        let result = self.page.evaluate(expression).await.map_err(|err| {
            AdapterError::new(AdapterErrorKind::EvalFailed).with_hint(err.to_string())
        })?;
        Ok(result.value().cloned().unwrap_or(Value::Null))
    }
}
