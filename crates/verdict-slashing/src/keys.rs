// crates/verdict-slashing/src/keys.rs
//
// Key layout of the slashing partition.
//
//   slash:next_id                                   -> next slash ID
//   slash:id:{id}                                   -> JSON Slash
//   argument:{arg}:count                            -> slash count
//   argument:{arg}:slash:{id}                       -> slash ID
//   argument:{arg}:slasher:{addr}:{id}              -> slash ID
//   creator:{addr}:slash:{id}                       -> slash ID
//   params                                          -> JSON Params
//
// Numbers are zero-padded to 20 digits so byte order matches numeric order
// and prefix scans come back in insertion (ID) order.

use verdict_core::Address;

pub const SLASH_ID_KEY: &[u8] = b"slash:next_id";

pub const PARAMS_KEY: &[u8] = b"params";

pub const SLASHES_PREFIX: &[u8] = b"slash:id:";

pub fn slash_key(slash_id: u64) -> Vec<u8> {
    format!("slash:id:{:020}", slash_id).into_bytes()
}

pub fn slash_count_key(argument_id: u64) -> Vec<u8> {
    format!("argument:{:020}:count", argument_id).into_bytes()
}

pub fn argument_slash_prefix(argument_id: u64) -> Vec<u8> {
    format!("argument:{:020}:slash:", argument_id).into_bytes()
}

pub fn argument_slash_key(argument_id: u64, slash_id: u64) -> Vec<u8> {
    format!("argument:{:020}:slash:{:020}", argument_id, slash_id).into_bytes()
}

pub fn argument_slasher_prefix(argument_id: u64, slasher: &Address) -> Vec<u8> {
    format!("argument:{:020}:slasher:{}:", argument_id, slasher.to_hex()).into_bytes()
}

pub fn argument_slasher_slash_key(argument_id: u64, slasher: &Address, slash_id: u64) -> Vec<u8> {
    format!(
        "argument:{:020}:slasher:{}:{:020}",
        argument_id,
        slasher.to_hex(),
        slash_id
    )
    .into_bytes()
}

pub fn creator_slash_prefix(creator: &Address) -> Vec<u8> {
    format!("creator:{}:slash:", creator.to_hex()).into_bytes()
}

pub fn creator_slash_key(creator: &Address, slash_id: u64) -> Vec<u8> {
    format!("creator:{}:slash:{:020}", creator.to_hex(), slash_id).into_bytes()
}
