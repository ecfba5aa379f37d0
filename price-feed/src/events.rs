use soroban_sdk::{Env, IntoVal, Symbol, Val, Vec};

pub enum OracleEvent {
    VerifiedPrice(u64),
    VerifiedTime(u64),
    MaxDelayUpdated(u64),
}

impl OracleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OracleEvent::VerifiedPrice(..) => "verified_price",
            OracleEvent::VerifiedTime(..) => "verified_time",
            OracleEvent::MaxDelayUpdated(..) => "max_delay_updated",
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            OracleEvent::VerifiedPrice(price) => {
                v.push_back(price.into_val(env));
            }
            OracleEvent::VerifiedTime(time) => {
                v.push_back(time.into_val(env));
            }
            OracleEvent::MaxDelayUpdated(max_delay_time) => {
                v.push_back(max_delay_time.into_val(env));
            }
        }

        env.events().publish((Symbol::new(env, self.name()),), v)
    }
}
