use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, GenericArgument, Ident, LitStr,
    PathArguments, Token, Type, TypeParamBound,
};

pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = generate_reflect_impl(&input).unwrap_or_else(syn::Error::into_compile_error);
    TokenStream::from(expanded)
}

/// `#[inject(...)]` on the struct itself
#[derive(Default)]
struct ClassArgs {
    name: Option<String>,
    extends: Option<String>,
    implements: Vec<String>,
}

/// `#[inject(...)]` on a field
#[derive(Default)]
struct FieldArgs {
    default: Option<Expr>,
    union: Vec<String>,
    class: Option<String>,
    nullable: bool,
    optional: bool,
    variadic: bool,
}

fn inject_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("inject"))
}

fn parse_names(meta: &syn::meta::ParseNestedMeta) -> syn::Result<Vec<String>> {
    let content;
    syn::parenthesized!(content in meta.input);
    // parse_any accepts `self`, so unions may refer to the declaring class.
    let names = content.parse_terminated(Ident::parse_any, Token![,])?;
    Ok(names.into_iter().map(|name| name.to_string()).collect())
}

fn parse_class_args(attrs: &[Attribute]) -> syn::Result<ClassArgs> {
    let mut args = ClassArgs::default();
    for attr in inject_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                args.name = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("extends") {
                args.extends = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("implements") {
                args.implements.extend(parse_names(&meta)?);
            } else {
                return Err(meta.error("expected `name`, `extends` or `implements`"));
            }
            Ok(())
        })?;
    }
    Ok(args)
}

fn parse_field_args(attrs: &[Attribute]) -> syn::Result<FieldArgs> {
    let mut args = FieldArgs::default();
    for attr in inject_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                args.default = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("union") {
                args.union = parse_names(&meta)?;
            } else if meta.path.is_ident("class") {
                args.class = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("nullable") {
                args.nullable = true;
            } else if meta.path.is_ident("optional") {
                args.optional = true;
            } else if meta.path.is_ident("variadic") {
                args.variadic = true;
            } else {
                return Err(meta.error(
                    "expected `default`, `union`, `class`, `nullable`, `optional` or `variadic`",
                ));
            }
            Ok(())
        })?;
    }
    Ok(args)
}

fn generate_reflect_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let class_args = parse_class_args(&input.attrs)?;
    let class_name = class_args
        .name
        .unwrap_or_else(|| struct_name.to_string());

    // Extract fields from the struct
    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "#[derive(Injectable)] only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "#[derive(Injectable)] can only be applied to structs",
            ))
        }
    };

    let mut parameters = Vec::with_capacity(fields.len());
    for field in &fields {
        let args = parse_field_args(&field.attrs)?;
        let field_name = field
            .ident
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        let described = describe_type(&field.ty);
        let nullable = args.nullable || described.as_ref().is_some_and(|d| d.nullable);
        let declared = if !args.union.is_empty() {
            Some(args.union.join("|"))
        } else if let Some(class) = args.class {
            Some(class)
        } else {
            described.map(|d| d.name)
        };

        let mut parameter = quote! { ::depwire::ParameterSignature::new(#field_name) };
        if let Some(declared) = declared {
            parameter = quote! { #parameter.typed(::depwire::ParameterType::parse(#declared)) };
        }
        if nullable {
            parameter = quote! { #parameter.nullable() };
        }
        if args.optional {
            parameter = quote! { #parameter.optional() };
        }
        if args.variadic {
            parameter = quote! { #parameter.variadic() };
        }
        if let Some(default) = args.default {
            parameter = quote! { #parameter.default_value(#default) };
        }
        parameters.push(parameter);
    }

    let extends = class_args
        .extends
        .map(|parent| quote! { .extends(#parent) });
    let implements = class_args.implements.iter().map(|iface| quote! { .implements(#iface) });
    let constructor = if fields.is_empty() {
        None
    } else {
        Some(quote! {
            .constructor(
                ::depwire::FunctionSignature::constructor()
                    #(.param(#parameters))*
            )
        })
    };

    Ok(quote! {
        impl #impl_generics ::depwire::Reflect for #struct_name #ty_generics #where_clause {
            fn class_signature() -> ::depwire::ClassSignature {
                ::depwire::ClassSignature::builder(#class_name)
                    #extends
                    #(#implements)*
                    #constructor
                    .build()
            }
        }
    })
}

struct DescribedType {
    name: String,
    nullable: bool,
}

/// Map a Rust field type to a declared parameter type name.
///
/// `Arc<T>`, `Box<T>`, `Rc<T>`, `Mutex<T>`, `RwLock<T>` and references are
/// looked through, `Option<T>`
/// makes the parameter nullable, and primitives map to builtin names.
fn describe_type(ty: &Type) -> Option<DescribedType> {
    match ty {
        Type::Path(type_path) => {
            let segment = type_path.path.segments.last()?;
            let ident = segment.ident.to_string();
            match ident.as_str() {
                "Option" => first_type_argument(&segment.arguments)
                    .and_then(describe_type)
                    .map(|inner| DescribedType {
                        name: inner.name,
                        nullable: true,
                    }),
                "Arc" | "Box" | "Rc" | "Mutex" | "RwLock" => {
                    first_type_argument(&segment.arguments).and_then(describe_type)
                }
                _ => Some(DescribedType {
                    name: builtin_name(&ident).unwrap_or(ident.as_str()).to_string(),
                    nullable: false,
                }),
            }
        }
        Type::Reference(reference) => describe_type(&reference.elem),
        Type::Paren(paren) => describe_type(&paren.elem),
        Type::Group(group) => describe_type(&group.elem),
        Type::TraitObject(object) => object.bounds.iter().find_map(|bound| match bound {
            TypeParamBound::Trait(bound) => bound.path.segments.last().map(|segment| {
                DescribedType {
                    name: segment.ident.to_string(),
                    nullable: false,
                }
            }),
            _ => None,
        }),
        Type::Slice(_) | Type::Array(_) | Type::Tuple(_) => Some(DescribedType {
            name: "array".to_string(),
            nullable: false,
        }),
        _ => None,
    }
}

fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    if let PathArguments::AngleBracketed(args) = arguments {
        args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
    } else {
        None
    }
}

fn builtin_name(ident: &str) -> Option<&'static str> {
    let name = match ident {
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
        | "u128" | "usize" => "int",
        "f32" | "f64" => "float",
        "bool" => "bool",
        "String" | "str" | "char" => "string",
        "Vec" | "VecDeque" | "HashMap" | "BTreeMap" | "HashSet" | "BTreeSet" | "IndexMap" => {
            "array"
        }
        _ => return None,
    };
    Some(name)
}
