//! 副作用执行 (Effects)
//!
//! 执行 dispatch 产生的接口请求，把结果转换回 Action 再交给 dispatch。

use std::io;

use log::{info, warn};

use super::actions::{Action, Mutation};
use super::state::App;
use crate::api::VoltageApi;
use crate::error::ApiError;
use crate::models::{CreatePayload, ListQuery, UpdatePayload};

/// dispatch 的返回值
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    Quit,
    Request(Request),
}

/// 一次接口调用
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    FetchList(ListQuery),
    Create(CreatePayload),
    Update(UpdatePayload),
    Delete(String),
}

/// 执行请求并转换为结果 Action
pub fn execute<A: VoltageApi + ?Sized>(api: &A, request: Request) -> Action {
    match request {
        Request::FetchList(query) => match api.get_list(&query) {
            Ok(data) => {
                info!(
                    "loaded page {} ({} of {} records)",
                    query.page_index,
                    data.voltages.len(),
                    data.count
                );
                Action::ListLoaded {
                    page: query.page_index,
                    page_size: query.page_size,
                    data,
                }
            }
            Err(e) => {
                warn!("list fetch failed: {}", e);
                Action::ListFailed(e.message())
            }
        },
        Request::Create(payload) => finish(Mutation::Create, api.create(&payload)),
        Request::Update(payload) => finish(Mutation::Update, api.update(&payload)),
        Request::Delete(id) => finish(Mutation::Delete, api.delete(&id)),
    }
}

fn finish(mutation: Mutation, result: Result<(), ApiError>) -> Action {
    match result {
        Ok(()) => {
            info!("{:?} succeeded", mutation);
            Action::MutationDone(mutation)
        }
        Err(e) => {
            warn!("{:?} failed: {}", mutation, e);
            Action::MutationFailed(mutation, e.message())
        }
    }
}

/// 分发 Action 并执行由此产生的请求链，直到没有后续请求
///
/// 每次发出请求前调用 `on_pending`，便于界面先绘制加载状态。返回 `true` 表示退出。
pub fn drive<A, F>(app: &mut App, api: &A, action: Action, mut on_pending: F) -> io::Result<bool>
where
    A: VoltageApi + ?Sized,
    F: FnMut(&App) -> io::Result<()>,
{
    let mut action = action;
    loop {
        match app.dispatch(action) {
            Command::None => return Ok(false),
            Command::Quit => return Ok(true),
            Command::Request(request) => {
                on_pending(app)?;
                action = execute(api, request);
            }
        }
    }
}
