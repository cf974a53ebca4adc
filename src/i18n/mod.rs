// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Every user-visible string on the page goes through Fluent, including the
//! interpolated toast messages. Translation files are embedded in the
//! binary; the active locale resolves from the CLI flag, then the saved
//! preference, then the OS locale, falling back to `en-US`.

pub mod fluent;
