use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

pub enum DeskEvent {
    Funded(Address, i128),
    Purchase(Address, u64, u64),
    Sale(Address, u64, u64),
}

impl DeskEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DeskEvent::Funded(..) => "funded",
            DeskEvent::Purchase(..) => "purchase",
            DeskEvent::Sale(..) => "sale",
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            DeskEvent::Funded(account, amount) => {
                v.push_back(account.into_val(env));
                v.push_back(amount.into_val(env));
            }
            DeskEvent::Purchase(buyer, price, time) => {
                v.push_back(buyer.into_val(env));
                v.push_back(price.into_val(env));
                v.push_back(time.into_val(env));
            }
            DeskEvent::Sale(seller, price, time) => {
                v.push_back(seller.into_val(env));
                v.push_back(price.into_val(env));
                v.push_back(time.into_val(env));
            }
        }

        env.events().publish((Symbol::new(env, self.name()),), v)
    }
}
