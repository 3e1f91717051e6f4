mod common;
mod trail;
mod transitions;
