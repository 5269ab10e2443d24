mod body_text_manual;
mod body_text_response;
