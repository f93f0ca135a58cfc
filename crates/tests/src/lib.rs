#[cfg(test)]
mod common;

#[cfg(test)]
mod scenario_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod persistence_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod layout_tests;
