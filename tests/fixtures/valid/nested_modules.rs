pub mod model {
    pub mod person {
        pub struct Person {
            pub name: String,
        }
    }

    pub type People = Vec<person::Person>;
}

#[cfg(test)]
mod tests {
    struct Person;
}
