//! Interactive chat application for DeclutterAI.
//!
//! This binary provides a terminal front-end for the session SDK: upload a
//! room photo, get organization advice, and ask follow-up questions.
//!
//! # Usage
//!
//! ```bash
//! GEMINI_API_KEY=... declutter-chat
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/image <path>` - Stage a photo to send with the next message
//! - `/new` - Start a new session (abandons the conversation)
//! - `/quit` - Exit the application

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use declutter::{ChatSession, EncodedImage, Gemini, Transcript, render};

const FIRST_ANALYSIS_PROMPT: &str = "Analyze this room and give me organization tips.";
const FOLLOWUP_ANALYSIS_PROMPT: &str = "Analyze this image.";
const SEND_ERROR_TEXT: &str =
    "Sorry, something went wrong. Please check your connection or try again.";

fn help_text() -> &'static str {
    "/help           Show this help
/image <path>   Stage a photo to send with the next message
/new            Start a new session
/quit           Exit"
}

/// Main entry point for the declutter-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let use_color = std::env::var_os("NO_COLOR").is_none();

    let client = Gemini::new(None)?;
    let mut session = ChatSession::new(client);
    let mut transcript = Transcript::new();
    let mut staged_image: Option<EncodedImage> = None;
    let mut rl = DefaultEditor::new()?;

    println!("DeclutterAI (model: {})", session.model());
    println!("Upload a room photo with /image <path>, then press enter to analyze.");
    println!("Type /help for commands, /quit to exit\n");

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim().to_string();
                let _ = rl.add_history_entry(&line);

                if let Some(rest) = line.strip_prefix("/image") {
                    let path = rest.trim();
                    if path.is_empty() {
                        eprintln!("usage: /image <path>");
                        continue;
                    }
                    match EncodedImage::from_path(path) {
                        Ok(image) => {
                            println!("Staged {} ({} base64 bytes)", path, image.data.len());
                            staged_image = Some(image);
                        }
                        Err(e) => eprintln!("{}", render::render_error(&e.to_string(), use_color)),
                    }
                    continue;
                }
                match line.as_str() {
                    "/quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "/new" => {
                        session.start_new_session();
                        transcript.clear();
                        staged_image = None;
                        println!("Started a new session.");
                        continue;
                    }
                    "/help" => {
                        for line in help_text().lines() {
                            println!("    {}", line);
                        }
                        continue;
                    }
                    _ => {}
                }

                if line.is_empty() && staged_image.is_none() {
                    continue;
                }
                if transcript.is_busy() {
                    // A send is outstanding; the REPL never gets here, but
                    // the flag is the contract for other front-ends.
                    continue;
                }

                let image = staged_image.take();
                let text = if line.is_empty() {
                    if transcript.messages().is_empty() {
                        FIRST_ANALYSIS_PROMPT.to_string()
                    } else {
                        FOLLOWUP_ANALYSIS_PROMPT.to_string()
                    }
                } else {
                    line
                };

                transcript.push_user(text.as_str(), image.as_ref().map(|i| i.data.clone()));
                transcript.set_busy(true);

                match session.send_message(&text, image).await {
                    Ok(reply) => {
                        transcript.push_model(reply.as_str());
                        for line in reply.lines() {
                            println!("{}", render::render_line(line, use_color));
                        }
                        println!();
                    }
                    Err(e) => {
                        eprintln!("{}", render::render_error(&e.to_string(), use_color));
                        transcript.push_error(SEND_ERROR_TEXT);
                        println!("{}", render::render_error(SEND_ERROR_TEXT, use_color));
                        println!();
                    }
                }
                transcript.set_busy(false);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                eprintln!("readline error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
