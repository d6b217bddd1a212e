// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Failures at the edges of the crate: talking to the DOM and reading records.
///
/// Rendering HTML strings never fails, only building nodes through an
/// [`ElementFactory`](crate::dom::ElementFactory) and parsing stored
/// records can.
#[derive(Debug, Error)]
pub enum Error {
    /// There is no global `window`, we aren't running in a browser.
    #[error("no global `window` exists")]
    NoWindow,

    /// The `window` has no `document`.
    #[error("`window` has no `document`")]
    NoDocument,

    /// A DOM call threw a JavaScript exception.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// A node wasn't of the expected DOM interface.
    #[error("node is not an instance of `{0}`")]
    Cast(&'static str),

    /// A stored list of records is missing fields or has wrong types.
    #[error("malformed to-do records: {0}")]
    Malformed(String),
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        let err = Error::Dom(format!("{err:?}"));

        log::warn!("{err}");

        err
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
