//! Value type tests: addresses, tokens and scope kinds.
