use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=tailwind.css");
    println!("cargo:rerun-if-changed=src/ui");
    println!("cargo:rerun-if-env-changed=MAESTRO_API_URL");

    // Regenerate the stylesheet with the locally installed tailwindcss.
    // The checked-in assets/tailwind.css is used when it is not installed.
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    if !manifest_dir.join("node_modules/.bin/tailwindcss").exists() {
        return;
    }

    let output = Command::new("npx")
        .arg("tailwindcss")
        .args(["-i", "tailwind.css", "-o", "assets/tailwind.css"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output();

    match output {
        Ok(output) => {
            if !output.status.success() {
                println!("cargo:warning=Failed to generate Tailwind CSS");
                println!(
                    "cargo:warning=STDERR: {}",
                    String::from_utf8_lossy(&output.stderr)
                );
            }
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {}", e);
        }
    }
}
