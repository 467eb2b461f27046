#[cfg(test)]
mod common;

#[cfg(test)]
mod view_selector_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod shell_tests;

#[cfg(test)]
mod calendar_tests;

#[cfg(test)]
mod bulk_editor_tests;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod report_tests;

#[cfg(test)]
mod config_tests;
