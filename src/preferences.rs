// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::ConfigurationError;
use crate::label::IndentLevel;
use crate::options::{RainbowOptions, TabWidth};
use crate::palette::{Opacity, Rgba};

/// Gets told about every effective change of the preferences.
pub trait ConfigObserver {
    fn on_config_change(&mut self, options: &RainbowOptions);
}

/// In-memory store of the user facing settings.
///
/// Every setter validates first;
/// only if the value is valid *and* differs from the current one,
/// it is stored and all subscribed observers get notified.
#[derive(Default)]
pub struct Preferences {
    options: RainbowOptions,
    observers: Vec<Rc<RefCell<dyn ConfigObserver>>>,
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("options", &self.options)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Preferences {
    #[must_use]
    pub fn new(options: RainbowOptions) -> Self {
        Self {
            options,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub const fn options(&self) -> &RainbowOptions {
        &self.options
    }

    /// Registers `observer`, and immediately hands it the current options,
    /// so it does not have to be initialized separately.
    pub fn subscribe(&mut self, observer: Rc<RefCell<dyn ConfigObserver>>) {
        observer.borrow_mut().on_config_change(&self.options);
        self.observers.push(observer);
    }

    fn update(&mut self, change: impl FnOnce(&mut RainbowOptions)) {
        let mut options = self.options.clone();
        change(&mut options);
        if options == self.options {
            return;
        }
        self.options = options;
        tracing::debug!(
            "Preferences changed, notifying {} observer(s): {:?}",
            self.observers.len(),
            self.options
        );
        for observer in &self.observers {
            observer.borrow_mut().on_config_change(&self.options);
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.update(|options| options.enabled = enabled);
    }

    /// Flips the enabled state, returning the new one.
    pub fn toggle(&mut self) -> bool {
        let enabled = !self.options.enabled;
        self.set_enabled(enabled);
        enabled
    }

    /// # Errors
    ///
    /// If `width` is smaller then 1.
    pub fn set_tab_width(&mut self, width: i64) -> Result<(), ConfigurationError> {
        let tab_width = TabWidth::new(width)?;
        self.update(|options| options.tab_width = tab_width);
        Ok(())
    }

    /// # Errors
    ///
    /// If `color` can not be parsed.
    pub fn set_color(&mut self, level: IndentLevel, color: &str) -> Result<(), ConfigurationError> {
        let color: Rgba = color.parse()?;
        self.update(|options| options.palette.set_color(level, color));
        Ok(())
    }

    /// # Errors
    ///
    /// If `opacity` is not within 0.0 - 1.0.
    pub fn set_opacity(&mut self, opacity: f32) -> Result<(), ConfigurationError> {
        let opacity = Opacity::new(opacity)?;
        self.update(|options| options.palette.set_opacity(opacity));
        Ok(())
    }
}
