use symptom_sniffer::diagnose_with_embedded_knowledge_base;

fn main() {
    env_logger::init();

    let text = "fever, cough, headache";

    let results = diagnose_with_embedded_knowledge_base(text).unwrap();

    println!("Possible diagnoses for the given symptoms \"{}\"", text);
    for result in results {
        println!("{}: {}%", result.name, result.match_percent);
    }
}
