use std::{
    fs,
    io::{self, Write},
    process::{exit, Command, Output},
};

fn main() {
    let wasm_lib = "hover_wasm";
    let wasm_target = "wasm32-unknown-unknown";
    let wasm_path = ["target/", wasm_target, "/release/", wasm_lib, ".wasm"].join("");
    let output_dir = "dist";

    println!(
        "\n📦 Packaging [[ {} ]] lib into '{}' directory for the preview server\n",
        wasm_lib, output_dir,
    );

    let mut command = Command::new("cargo");
    command
        .arg("build")
        .args(["-p", wasm_lib])
        .arg("--lib")
        .args(["--target", wasm_target])
        .arg("--release");

    validate_command_result(&mut command);

    let mut command = Command::new("wasm-bindgen");
    command
        .arg(wasm_path)
        .args(["--out-dir", output_dir])
        .args(["--target", "web"])
        .arg("--no-typescript");

    validate_command_result(&mut command);

    let index_page = format!("{}/index.html", wasm_lib);
    if let Err(e) = fs::copy(&index_page, format!("{}/index.html", output_dir)) {
        println!("FAILURE ✖ copying {} :: {}", index_page, e);
        exit(1);
    }

    println!(
        "\n⚡ Finished packaging browser resources into './{}' directory\n",
        output_dir
    );

    match fs::read_dir(output_dir) {
        Ok(entries) => {
            println!("-------- CONTENTS --------");
            for entry in entries.flatten() {
                println!("{}", entry.file_name().to_string_lossy());
            }
            println!("--------------------------");
        }
        Err(e) => println!("could not list '{}' :: {}", output_dir, e),
    }
}

fn validate_command_result(command: &mut Command) {
    println!("EXECUTING :: ( {:?} )", command);
    let output = match command.output() {
        Ok(output) => output,
        Err(e) => {
            println!("FAILURE ✖ could not start command :: {}", e);
            exit(1);
        }
    };

    if output.status.success() {
        println!("SUCCESS ✔");
    } else {
        println!("FAILURE ✖");
        println!("---------------- FAILURE OUTPUT ----------------");
        write_all_feedback(&output);
        println!("------------------------------------------------");
        exit(1);
    }
}

fn write_all_feedback(output: &Output) {
    // best effort, the process exits right after
    let _ = io::stdout().write_all(&output.stdout);
    let _ = io::stderr().write_all(&output.stderr);
}
