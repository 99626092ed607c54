//! Extract fenced example blocks from a specification document.
//!
//! A spec document is free-form prose with example blocks fenced by 32
//! backticks. Each block holds an input section and its expected output,
//! separated by a line containing a single `.`:
//!
//! ~~~text
//! ## Emphasis
//!
//! ```````````````````````````````` example
//! *hi*
//! .
//! <em>hi</em>
//! ````````````````````````````````
//! ~~~
//!
//! [`parser`] turns a document into [`parser::TestRecord`]s, [`selector`]
//! filters them and [`report`] renders them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod parser;
pub mod report;
pub mod selector;
