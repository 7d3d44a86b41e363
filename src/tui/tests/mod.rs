//! Rendering and key-flow tests for the shell

mod event_tests;
