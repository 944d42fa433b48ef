//! Wire client implementation
//!
//! W3C-WebDriver-over-HTTP implementation of [`AutomationClient`]. The
//! endpoint (a WinAppDriver-style server) owns the application process;
//! this client only issues session-scoped commands against it.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, info};

use super::traits::{AutomationClient, LaunchSpec, WindowRect};
use crate::{Error, Result};

/// W3C element identifier key in find-element responses
const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";
/// Legacy (JSON wire protocol) element identifier key
const LEGACY_ELEMENT_KEY: &str = "ELEMENT";

/// WebDriver wire client
#[derive(Debug)]
pub struct WireClient {
    http: reqwest::Client,
    endpoint: String,
    session: RwLock<Option<String>>,
}

impl WireClient {
    /// Create a new wire client against an endpoint base URL
    pub fn new(endpoint: &str, command_timeout_ms: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(command_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            session: RwLock::new(None),
        })
    }

    fn session_id(&self) -> Result<String> {
        self.session
            .read()
            .map_err(|e| Error::transport(format!("Lock error: {}", e)))?
            .clone()
            .ok_or_else(|| Error::transport("No open session"))
    }

    fn set_session(&self, id: Option<String>) -> Result<()> {
        *self
            .session
            .write()
            .map_err(|e| Error::transport(format!("Lock error: {}", e)))? = id;
        Ok(())
    }

    /// Issue a command and unwrap the response `value` envelope
    async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = format!("{}{}", self.endpoint, path);
        debug!("Wire command: {} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let payload: Value = response.json().await?;
        let value = payload.get("value").cloned().unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(Self::map_failure(&value));
        }

        Ok(value)
    }

    /// Map a WebDriver error payload to the local taxonomy
    fn map_failure(value: &Value) -> Error {
        let code = value
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown error");
        let message = value
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or(code)
            .to_string();

        match code {
            "no such element" | "stale element reference" => Error::element_not_found(message),
            "timeout" | "script timeout" => Error::timeout(message),
            "session not created" => Error::session_start(message),
            _ => Error::transport(format!("{}: {}", code, message)),
        }
    }

    /// Build the new-session capability payload for an application target
    fn launch_capabilities(spec: &LaunchSpec) -> Value {
        let mut always_match = json!({
            "platformName": "Windows",
            "appium:app": spec.app,
        });
        if !spec.args.is_empty() {
            always_match["appium:appArguments"] = json!(spec.args.join(" "));
        }

        json!({
            "capabilities": {
                "alwaysMatch": always_match,
                "firstMatch": [{}],
            }
        })
    }

    /// Extract the remote element handle from a find-element payload
    fn extract_element(value: &Value) -> Result<String> {
        value
            .get(ELEMENT_KEY)
            .or_else(|| value.get(LEGACY_ELEMENT_KEY))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| Error::protocol("Find-element response carried no element id"))
    }

    fn find_body(automation_id: &str) -> Value {
        json!({
            "using": "accessibility id",
            "value": automation_id,
        })
    }
}

#[async_trait]
impl AutomationClient for WireClient {
    async fn launch(&self, spec: &LaunchSpec) -> Result<()> {
        info!("Launching application: {}", spec.app);

        let value = self
            .execute(
                Method::POST,
                "/session",
                Some(Self::launch_capabilities(spec)),
            )
            .await
            .map_err(|e| Error::session_start(e.to_string()))?;

        let session_id = value
            .get("sessionId")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| Error::session_start("New-session response carried no session id"))?;

        debug!("Session attached: {}", session_id);
        self.set_session(Some(session_id))
    }

    async fn quit(&self) -> Result<()> {
        let session_id = {
            let mut guard = self
                .session
                .write()
                .map_err(|e| Error::transport(format!("Lock error: {}", e)))?;
            guard.take()
        };

        match session_id {
            Some(id) => {
                info!("Closing session: {}", id);
                self.execute(Method::DELETE, &format!("/session/{}", id), None)
                    .await?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn is_attached(&self) -> bool {
        self.session
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    async fn find_element(&self, automation_id: &str) -> Result<String> {
        let session_id = self.session_id()?;
        let value = self
            .execute(
                Method::POST,
                &format!("/session/{}/element", session_id),
                Some(Self::find_body(automation_id)),
            )
            .await?;

        Self::extract_element(&value)
    }

    async fn find_elements(&self, automation_id: &str) -> Result<Vec<String>> {
        let session_id = self.session_id()?;
        let value = self
            .execute(
                Method::POST,
                &format!("/session/{}/elements", session_id),
                Some(Self::find_body(automation_id)),
            )
            .await?;

        let items = value
            .as_array()
            .ok_or_else(|| Error::protocol("Find-elements response was not a list"))?;

        items.iter().map(Self::extract_element).collect()
    }

    async fn click(&self, element: &str) -> Result<()> {
        let session_id = self.session_id()?;
        self.execute(
            Method::POST,
            &format!("/session/{}/element/{}/click", session_id, element),
            Some(json!({})),
        )
        .await?;
        Ok(())
    }

    async fn send_keys(&self, element: &str, keys: &str) -> Result<()> {
        let session_id = self.session_id()?;
        self.execute(
            Method::POST,
            &format!("/session/{}/element/{}/value", session_id, element),
            Some(json!({ "text": keys })),
        )
        .await?;
        Ok(())
    }

    async fn element_text(&self, element: &str) -> Result<String> {
        let session_id = self.session_id()?;
        let value = self
            .execute(
                Method::GET,
                &format!("/session/{}/element/{}/text", session_id, element),
                None,
            )
            .await?;

        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| Error::protocol("Element text was not a string"))
    }

    async fn element_attribute(&self, element: &str, name: &str) -> Result<Option<String>> {
        let session_id = self.session_id()?;
        let value = self
            .execute(
                Method::GET,
                &format!(
                    "/session/{}/element/{}/attribute/{}",
                    session_id, element, name
                ),
                None,
            )
            .await?;

        Ok(value.as_str().map(|s| s.to_string()))
    }

    async fn page_source(&self) -> Result<String> {
        let session_id = self.session_id()?;
        let value = self
            .execute(
                Method::GET,
                &format!("/session/{}/source", session_id),
                None,
            )
            .await?;

        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| Error::protocol("Page source was not a string"))
    }

    async fn window_rect(&self) -> Result<WindowRect> {
        let session_id = self.session_id()?;
        let value = self
            .execute(
                Method::GET,
                &format!("/session/{}/window/rect", session_id),
                None,
            )
            .await?;

        let field = |name: &str| -> Result<f64> {
            value
                .get(name)
                .and_then(|v| v.as_f64())
                .ok_or_else(|| Error::protocol(format!("Window rect missing '{}'", name)))
        };

        Ok(WindowRect {
            x: field("x")? as i32,
            y: field("y")? as i32,
            width: field("width")? as u32,
            height: field("height")? as u32,
        })
    }

    async fn set_window_rect(&self, rect: &WindowRect) -> Result<()> {
        let session_id = self.session_id()?;
        self.execute(
            Method::POST,
            &format!("/session/{}/window/rect", session_id),
            Some(json!({
                "x": rect.x,
                "y": rect.y,
                "width": rect.width,
                "height": rect.height,
            })),
        )
        .await?;
        Ok(())
    }
}
