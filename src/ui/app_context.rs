use crate::api::UserApi;
use crate::config::Config;
use dioxus::prelude::*;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Backend handle shared by every page
#[derive(Clone)]
pub struct SharedUserApi {
    inner: Arc<dyn UserApi>,
}

impl PartialEq for SharedUserApi {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SharedUserApi {
    pub fn new(api: impl UserApi + 'static) -> Self {
        Self {
            inner: Arc::new(api),
        }
    }

    pub fn get(&self) -> &dyn UserApi {
        self.inner.as_ref()
    }
}

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub api: SharedUserApi,
    pub config: Config,
}

#[derive(Error, Debug)]
#[error("App context already initialized")]
pub struct AlreadyInitialized;

// Global instance - set once at startup before the window opens
static APP_CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// Install the context the UI will run with (must be called at app startup)
pub fn initialize_app_context(context: AppContext) -> Result<(), AlreadyInitialized> {
    APP_CONTEXT.set(context).map_err(|_| AlreadyInitialized)
}

pub fn get_app_context() -> Option<AppContext> {
    APP_CONTEXT.get().cloned()
}

/// Context provider making the app context available to every page
#[component]
pub fn AppContextProvider(context: AppContext, children: Element) -> Element {
    use_context_provider(|| context);

    rsx! {
        {children}
    }
}

/// Hook to access the users backend from components
pub fn use_user_api() -> SharedUserApi {
    use_context::<AppContext>().api
}
