//! Platform - Dependency injection container for all ports.
//!
//! Hybrid approach:
//! - Stateless ports: `&'static` references (zero-cost)
//! - Stateful ports: `Rc<dyn Trait>` (ref-counted, single-threaded page)
use crate::ports::{HostPort, LoggerPort, RenderTargetPort, TimerPort};
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::{ManualTimer, MemoryHost, MemoryRenderTarget};
#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::{BrowserTimer, DomRenderTarget, TelegramHost};

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    host: Rc<dyn HostPort>,
    render: Rc<dyn RenderTargetPort>,
    timer: Rc<dyn TimerPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> PlatformBuilder {
        PlatformBuilder::default()
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn host(&self) -> &dyn HostPort {
        self.host.as_ref()
    }

    #[inline]
    pub fn render(&self) -> &dyn RenderTargetPort {
        self.render.as_ref()
    }

    #[inline]
    pub fn timer(&self) -> &dyn TimerPort {
        self.timer.as_ref()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for substituting individual ports, typically with test doubles.
#[derive(Default)]
pub struct PlatformBuilder {
    logger: Option<&'static dyn LoggerPort>,
    host: Option<Rc<dyn HostPort>>,
    render: Option<Rc<dyn RenderTargetPort>>,
    timer: Option<Rc<dyn TimerPort>>,
}

impl PlatformBuilder {
    pub fn logger(mut self, logger: &'static dyn LoggerPort) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn host(mut self, host: Rc<dyn HostPort>) -> Self {
        self.host = Some(host);
        self
    }

    pub fn render(mut self, render: Rc<dyn RenderTargetPort>) -> Self {
        self.render = Some(render);
        self
    }

    pub fn timer(mut self, timer: Rc<dyn TimerPort>) -> Self {
        self.timer = Some(timer);
        self
    }

    pub fn build(self) -> Platform {
        Platform {
            logger: self.logger.unwrap_or_else(crate::adapters::logger),
            host: self.host.unwrap_or_else(default_host),
            render: self.render.unwrap_or_else(default_render),
            timer: self.timer.unwrap_or_else(default_timer),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_host() -> Rc<dyn HostPort> {
    Rc::new(TelegramHost::new())
}

#[cfg(target_arch = "wasm32")]
fn default_render() -> Rc<dyn RenderTargetPort> {
    Rc::new(DomRenderTarget::new())
}

#[cfg(target_arch = "wasm32")]
fn default_timer() -> Rc<dyn TimerPort> {
    Rc::new(BrowserTimer::new())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_host() -> Rc<dyn HostPort> {
    Rc::new(MemoryHost::default())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_render() -> Rc<dyn RenderTargetPort> {
    Rc::new(MemoryRenderTarget::default())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_timer() -> Rc<dyn TimerPort> {
    Rc::new(ManualTimer::new())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_platform_creation() {
        let platform = Platform::new();
        platform.logger().log("test");
    }

    #[test]
    fn test_platform_clone_shares_ports() {
        let render = Rc::new(MemoryRenderTarget::default());
        let platform = Platform::builder().render(render.clone()).build();
        let cloned = platform.clone();

        cloned.render().set_root_class("dark-theme", true).unwrap();
        assert!(render.has_root_class("dark-theme"));
    }

    #[test]
    fn test_default_host_is_light_without_tokens() {
        let platform = Platform::default();
        let context = platform.host().theme_context().unwrap();
        assert!(!context.scheme().is_dark());
        assert_eq!(context.button_color(), None);
    }

    #[test]
    fn test_platform_logger_access() {
        let platform = Platform::new();
        let logger = platform.logger();
        logger.log("test 1");
        logger.warn("test 2");
        logger.error("test 3");
    }
}
