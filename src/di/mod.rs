mod builder;
mod container;
mod resolver;

pub use builder::ContainerBuilder;
pub use container::Container;
pub use resolver::DependencyResolver;
