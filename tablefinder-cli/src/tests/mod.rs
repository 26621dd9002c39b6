//! Shared test harness modules for the Tablefinder CLI.

use super::*;

mod helpers;
