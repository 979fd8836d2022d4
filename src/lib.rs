//! A four-function pocket calculator served as MCP tools over stdio.
//!
//! [`engine`] holds the calculator state, [`display`] renders it (including the
//! timed ON/OFF status), [`session`] ties the two together and [`handler`]
//! serves a session to an MCP client through [`tools`].

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod handler;
pub mod keypad;
pub mod mcp_types;
pub mod notify;
pub mod session;
pub mod tools;
