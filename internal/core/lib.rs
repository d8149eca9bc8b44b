// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
# Biblio frontend core library

Platform-free logic behind the Biblio page behaviors: due-date
classification, ISBN plausibility checks, toast severities, the AJAX
response envelope and the user-facing string constants.

Everything in this crate is computable without a DOM, so it can be unit
tested on the host. The browser glue lives in the `biblio-wasm-frontend`
crate, which is the only consumer.

**NOTE**: This crate is an **internal** crate of the Biblio project.
Applications should not depend on it directly.
*/

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod ajax;
pub mod due_dates;
pub mod isbn;
pub mod pages;
pub mod prompts;
pub mod toast;
