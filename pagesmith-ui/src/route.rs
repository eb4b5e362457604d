//! Path-based navigation without a router: the current [`Route`] lives in a
//! signal and `history.pushState` keeps the address bar in sync.

use dioxus::prelude::*;
use shared_types::{FrameId, ProjectId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Workspace,
    Playground {
        project_id: ProjectId,
        frame_id: Option<FrameId>,
    },
    NotFound(String),
}

impl Route {
    pub fn playground(project_id: ProjectId, frame_id: FrameId) -> Self {
        Route::Playground {
            project_id,
            frame_id: Some(frame_id),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Workspace => "/workspace".to_string(),
            Route::Playground {
                project_id,
                frame_id: Some(frame_id),
            } => format!("/playground/{project_id}?frameId={frame_id}"),
            Route::Playground {
                project_id,
                frame_id: None,
            } => format!("/playground/{project_id}"),
            Route::NotFound(path) => path.clone(),
        }
    }
}

/// Parse a location `pathname` and `search` (with or without the `?`).
pub fn parse_route(path: &str, search: &str) -> Route {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Route::Home,
        ["workspace"] => Route::Workspace,
        ["playground", project_id] => Route::Playground {
            project_id: ProjectId(project_id.to_string()),
            frame_id: query_param(search, "frameId").map(FrameId),
        },
        _ => Route::NotFound(path.to_string()),
    }
}

fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

pub fn current_route() -> Route {
    let location = web_sys::window().map(|w| w.location());
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_default();
    let search = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();
    parse_route(&path, &search)
}

/// App-wide navigation state, provided by the root component.
#[derive(Clone, Copy)]
pub struct RouteState(pub Signal<Route>);

impl RouteState {
    pub fn current(&self) -> Route {
        self.0.read().clone()
    }

    pub fn navigate(&mut self, route: Route) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.href()));
        }
        self.0.set(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(parse_route("/", ""), Route::Home);
        assert_eq!(parse_route("/workspace/", ""), Route::Workspace);
        assert_eq!(
            parse_route("/playground/p-1", "?frameId=f-9&x=1"),
            Route::playground(ProjectId("p-1".into()), FrameId("f-9".into()))
        );
    }

    #[test]
    fn missing_frame_id_is_none() {
        assert_eq!(
            parse_route("/playground/p-1", "?frameId="),
            Route::Playground {
                project_id: ProjectId("p-1".into()),
                frame_id: None
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            parse_route("/pricing", ""),
            Route::NotFound("/pricing".to_string())
        );
    }

    #[test]
    fn href_round_trips() {
        let route = Route::playground(ProjectId("p".into()), FrameId("f".into()));
        assert_eq!(route.href(), "/playground/p?frameId=f");
        let (path, search) = route.href().split_once('?').map(|(p, s)| (p.to_string(), s.to_string())).unwrap();
        assert_eq!(parse_route(&path, &search), route);
    }
}
