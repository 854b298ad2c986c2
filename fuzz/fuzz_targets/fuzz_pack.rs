#![no_main]
use jsonpack::Arg;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, Vec<(bool, i64, String)>)| {
    let (format, raw) = data;
    let args: Vec<Arg<'_>> = raw
        .iter()
        .map(|(is_int, i, s)| if *is_int { Arg::Int(*i) } else { Arg::Str(s) })
        .collect();
    if let Ok(obj) = jsonpack::pack(format, &args) {
        let _ = jsonpack::to_string(&obj);
    }
});
