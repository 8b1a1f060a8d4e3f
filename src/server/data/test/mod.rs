mod badge;
mod category;
mod certificate;
mod course;
mod enrollment;
mod forum;
mod notification;
mod progress;
mod quiz_attempt;
mod user;
