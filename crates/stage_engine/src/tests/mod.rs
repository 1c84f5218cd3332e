//! Integration tests for the object factory against a live game
