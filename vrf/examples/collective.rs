use rand::Rng;
use vrf::{Proof, SecretKey, aggregate, aggregate_mod};

fn main() {
    let mut rng = rand::rng();
    let secret_key = SecretKey::random(&mut rng);
    let public_key = secret_key.public_key().expect("public key");

    let messages: Vec<String> = (1..=4)
        .map(|i| format!("participant_{i}_{:08x}", rng.random::<u32>()))
        .collect();

    let mut outputs = Vec::new();
    for message in &messages {
        let (output, proof) = secret_key
            .evaluate(&mut rng, message.as_bytes())
            .expect("evaluate");

        let proof_bytes = bincode::serialize(&proof).expect("serialize proof");
        let proof: Proof = bincode::deserialize(&proof_bytes).expect("deserialize proof");

        assert!(public_key.verify(message.as_bytes(), &output, &proof));
        println!("[{message}] output {}", hex_string(&output.0));

        outputs.push(output);
    }

    let collective = aggregate(&outputs);
    println!("collective randomness: {}", hex_string(&collective));
    println!("collective draw (0-100): {}", aggregate_mod(&outputs, 101));
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
