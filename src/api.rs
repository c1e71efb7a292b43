//! 电压设备接口客户端
//!
//! `VoltageApi` 是界面与服务端之间的边界，`HttpVoltageApi` 基于 reqwest 阻塞客户端实现。

use log::debug;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{self, ApiError};
use crate::models::{
    CreatePayload, DeletePayload, Envelope, ListQuery, UpdatePayload, VoltagePage,
};

const RESOURCE: &str = "voltage";

pub trait VoltageApi {
    fn get_list(&self, query: &ListQuery) -> Result<VoltagePage, ApiError>;
    fn create(&self, payload: &CreatePayload) -> Result<(), ApiError>;
    fn update(&self, payload: &UpdatePayload) -> Result<(), ApiError>;
    fn delete(&self, id: &str) -> Result<(), ApiError>;
}

pub struct HttpVoltageApi {
    client: Client,
    endpoint: String,
}

impl HttpVoltageApi {
    pub fn from_config(config: &Config) -> error::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::from)?;
        Ok(Self {
            client,
            endpoint: endpoint(&config.base_url),
        })
    }
}

impl VoltageApi for HttpVoltageApi {
    fn get_list(&self, query: &ListQuery) -> Result<VoltagePage, ApiError> {
        debug!("GET {} {:?}", self.endpoint, query);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&query.to_params())
            .send()?;
        let body = check(response)?.text()?;
        let envelope: Envelope<VoltagePage> =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    fn create(&self, payload: &CreatePayload) -> Result<(), ApiError> {
        debug!("POST {} {:?}", self.endpoint, payload);
        let response = self.client.post(&self.endpoint).json(payload).send()?;
        check(response).map(drop)
    }

    fn update(&self, payload: &UpdatePayload) -> Result<(), ApiError> {
        debug!("PUT {} {:?}", self.endpoint, payload);
        let response = self.client.put(&self.endpoint).json(payload).send()?;
        check(response).map(drop)
    }

    fn delete(&self, id: &str) -> Result<(), ApiError> {
        debug!("DELETE {} id={}", self.endpoint, id);
        let response = self
            .client
            .delete(&self.endpoint)
            .json(&DeletePayload { id })
            .send()?;
        check(response).map(drop)
    }
}

fn endpoint(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), RESOURCE)
}

/// 非 2xx 响应转为 `ApiError::Server`
fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    let fallback = status.canonical_reason().unwrap_or("请求失败");
    Err(ApiError::Server {
        status: status.as_u16(),
        message: error_message(&body, fallback),
    })
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// 取出错误响应体中的 `message`，取不到时使用 `fallback`
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
