use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

pub fn extend_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl::<K>(key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

// PERSISTENT STORAGE
pub fn store_persistent<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, val);
    extend_persistent(env, key);
}

pub fn get_persistent<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().persistent().get(key)
}

// INSTANCE STORAGE
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    extend_instance(env);
}

pub fn get_data<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{contract, contractimpl, symbol_short, Address};

    #[contract]
    struct StorageHost;

    #[contractimpl]
    impl StorageHost {}

    #[test]
    fn test_missing_keys_read_as_none() {
        let env = Env::default();
        let host: Address = env.register(StorageHost, ());

        env.as_contract(&host, || {
            let instance: Option<u64> = get_data(&env, &symbol_short!("absent"));
            let persistent: Option<u64> = get_persistent(&env, &symbol_short!("absent"));
            assert_eq!(instance, None);
            assert_eq!(persistent, None);
        });
    }

    #[test]
    fn test_instance_and_persistent_are_separate() {
        let env = Env::default();
        let host: Address = env.register(StorageHost, ());

        env.as_contract(&host, || {
            store_data(&env, &symbol_short!("window"), &60u64);
            store_persistent(&env, &symbol_short!("window"), &90u64);

            let instance: Option<u64> = get_data(&env, &symbol_short!("window"));
            let persistent: Option<u64> = get_persistent(&env, &symbol_short!("window"));
            assert_eq!(instance, Some(60));
            assert_eq!(persistent, Some(90));
        });
    }
}
