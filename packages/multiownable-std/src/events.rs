use core::fmt::Debug;
use soroban_sdk::{Env, IntoVal, Topics, Val};

/// A structured notification published by a governance operation.
///
/// Events are fire-and-forget: nothing in the module reads them back, so they never influence
/// control flow.
pub trait Event: Debug + PartialEq + Sized {
    fn topics(&self, env: &Env) -> impl Topics + Debug;

    fn data(&self, env: &Env) -> impl IntoVal<Env, Val> + Debug;

    fn emit(self, env: &Env) {
        env.events().publish(self.topics(env), self.data(env));
    }
}

#[cfg(any(test, feature = "testutils"))]
mod testutils {
    use super::Event;
    use crate::testutils::assert_emitted_event;
    use soroban_sdk::{Address, Env};

    /// Asserts that the event at `event_index` is exactly `expected`, counting from the end when negative.
    pub fn assert_event_at<E: Event>(
        env: &Env,
        event_index: i32,
        contract_id: &Address,
        expected: E,
    ) {
        assert_emitted_event(
            env,
            event_index,
            contract_id,
            expected.topics(env),
            expected.data(env),
        );
    }

    pub fn assert_last_event<E: Event>(env: &Env, contract_id: &Address, expected: E) {
        assert_event_at(env, -1, contract_id, expected);
    }
}

#[cfg(any(test, feature = "testutils"))]
pub use testutils::*;
