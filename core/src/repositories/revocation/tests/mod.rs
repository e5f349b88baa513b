//! Tests for the revocation store mock
