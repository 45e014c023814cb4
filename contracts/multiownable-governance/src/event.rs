use core::fmt::Debug;
use multiownable_std::events::Event;
use soroban_sdk::{Address, Env, IntoVal, Symbol, Topics, Val, Vec};

/// A call approved by the owners was forwarded to its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutedEvent {
    pub contract: Address,
    pub func: Symbol,
    pub args: Vec<Val>,
}

impl Event for ExecutedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "executed"),
            self.contract.to_val(),
            self.func.to_val(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.args.clone(),)
    }
}
