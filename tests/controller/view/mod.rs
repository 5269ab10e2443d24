mod view_model;
mod view_name;
