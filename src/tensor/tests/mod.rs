mod add;
mod mul;
