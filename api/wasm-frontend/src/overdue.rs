// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
Periodic refresh of due-date badges.

Badges are collected once from the server-rendered markup; every refresh
recomputes text and color from the badge's timestamp. Elements whose
`data-due-date` does not parse are skipped with a console warning and keep
whatever the server rendered.
*/

use std::rc::Rc;

use web_sys::{Document, Element};

use i_biblio_core::due_dates::{self, DueStatus};

use crate::dom::{self, JsResult};
use crate::timer::Interval;

/// Elements carrying a due-date timestamp.
pub const BADGE_SELECTOR: &str = "[data-due-date]";

/// One server-rendered element with a parsed due timestamp.
pub struct DueDateBadge {
    element: Element,
    due_ms: i64,
}

impl DueDateBadge {
    fn from_element(element: Element) -> Option<Self> {
        let raw = element.get_attribute("data-due-date")?;
        match due_dates::parse_due_date(&raw) {
            Some(due_ms) => Some(Self { element, due_ms }),
            None => {
                web_sys::console::warn_1(
                    &format!("ignoring unparsable due date {raw:?}").into(),
                );
                None
            }
        }
    }

    /// Recompute the badge's label and color class for the given time.
    pub fn refresh(&self, now_ms: i64) {
        let days = due_dates::days_remaining(self.due_ms, now_ms);
        let status = DueStatus::classify(days);

        let classes = self.element.class_list();
        for class in DueStatus::CSS_CLASSES {
            let _ = classes.remove_1(class);
        }
        let _ = classes.add_1(status.css_class());
        self.element.set_text_content(Some(&DueStatus::label(days)));
    }
}

/// Owns the due-date badges of the page and the repeating refresh timer.
pub struct OverdueRefresher {
    badges: Rc<Vec<DueDateBadge>>,
    interval: Option<Interval>,
}

impl OverdueRefresher {
    /// Collect all parseable badges of the document. Does not start the
    /// timer.
    pub fn new(document: &Document) -> JsResult<Self> {
        let badges = dom::select_all(document, BADGE_SELECTOR)?
            .into_iter()
            .filter_map(DueDateBadge::from_element)
            .collect::<Vec<_>>();
        Ok(Self { badges: Rc::new(badges), interval: None })
    }

    /// Refresh every badge against the current time.
    pub fn refresh_now(&self) {
        let now_ms = js_sys::Date::now() as i64;
        for badge in self.badges.iter() {
            badge.refresh(now_ms);
        }
    }

    /// Begin the periodic refresh. Idempotent.
    pub fn start(&mut self) -> JsResult<()> {
        if self.interval.is_some() {
            return Ok(());
        }
        let badges = self.badges.clone();
        self.interval = Some(Interval::start(due_dates::REFRESH_INTERVAL, move || {
            let now_ms = js_sys::Date::now() as i64;
            for badge in badges.iter() {
                badge.refresh(now_ms);
            }
        })?);
        Ok(())
    }

    /// Stop the periodic refresh; badges keep their last state.
    pub fn stop(&mut self) {
        self.interval = None;
    }

    /// Whether the repeating timer is active.
    pub fn is_running(&self) -> bool {
        self.interval.as_ref().is_some_and(Interval::running)
    }

    /// Number of badges under management.
    pub fn badge_count(&self) -> usize {
        self.badges.len()
    }
}
