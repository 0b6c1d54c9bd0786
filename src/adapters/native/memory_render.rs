use crate::domain::error::UiError;
use crate::domain::notification::{Banner, BannerId};
use crate::ports::{CloseCallback, RenderTargetPort};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBanner {
    pub id: BannerId,
    pub class_name: String,
    pub role: String,
    pub inner_html: String,
}

/// State of the in-memory page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub root_classes: BTreeSet<String>,
    pub style_variables: BTreeMap<String, String>,
    pub containers: BTreeMap<String, Vec<RenderedBanner>>,
}

/// In-memory page used as the render target off-wasm.
///
/// Containers are addressed by the exact selector string they were
/// registered under; no selector matching is performed.
#[derive(Default)]
pub struct MemoryRenderTarget {
    page: RefCell<PageSnapshot>,
    close_handlers: RefCell<HashMap<BannerId, CloseCallback>>,
    close_count: Cell<usize>,
}

impl MemoryRenderTarget {
    pub fn with_container(selector: &str) -> Self {
        let target = Self::default();
        target.add_container(selector);
        target
    }

    pub fn add_container(&self, selector: &str) {
        self.page
            .borrow_mut()
            .containers
            .entry(selector.to_string())
            .or_default();
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.page.borrow().root_classes.contains(class)
    }

    pub fn root_classes(&self) -> Vec<String> {
        self.page.borrow().root_classes.iter().cloned().collect()
    }

    pub fn style_variable(&self, name: &str) -> Option<String> {
        self.page.borrow().style_variables.get(name).cloned()
    }

    /// Banners in `selector`, first child first.
    pub fn banners(&self, selector: &str) -> Vec<RenderedBanner> {
        self.page
            .borrow()
            .containers
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.page.borrow().clone()
    }

    /// Number of banners actually removed from the page.
    pub fn close_count(&self) -> usize {
        self.close_count.get()
    }

    /// Simulates a click on the banner's close button.
    pub fn click_close(&self, id: BannerId) {
        let handler = self.close_handlers.borrow().get(&id).cloned();
        if let Some(handler) = handler {
            handler();
        }
    }
}

impl RenderTargetPort for MemoryRenderTarget {
    fn set_root_class(&self, class: &str, present: bool) -> Result<(), UiError> {
        let mut page = self.page.borrow_mut();
        if present {
            page.root_classes.insert(class.to_string());
        } else {
            page.root_classes.remove(class);
        }
        Ok(())
    }

    fn set_style_variable(&self, name: &str, value: &str) -> Result<(), UiError> {
        self.page
            .borrow_mut()
            .style_variables
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn prepend_banner(
        &self,
        container_selector: &str,
        banner: &Banner,
        on_close: CloseCallback,
    ) -> Result<(), UiError> {
        let mut page = self.page.borrow_mut();
        let container = page
            .containers
            .get_mut(container_selector)
            .ok_or_else(|| UiError::ContainerNotFound(container_selector.to_string()))?;

        container.insert(
            0,
            RenderedBanner {
                id: banner.id,
                class_name: banner.class_name(),
                role: banner.role().to_string(),
                inner_html: banner.inner_html(),
            },
        );
        self.close_handlers.borrow_mut().insert(banner.id, on_close);
        Ok(())
    }

    fn close_banner(&self, id: BannerId) -> Result<bool, UiError> {
        let removed = self
            .page
            .borrow_mut()
            .containers
            .values_mut()
            .any(|banners| {
                let before = banners.len();
                banners.retain(|banner| banner.id != id);
                banners.len() != before
            });

        self.close_handlers.borrow_mut().remove(&id);
        if removed {
            self.close_count.set(self.close_count.get() + 1);
        }
        Ok(removed)
    }
}
