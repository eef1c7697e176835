//! Canonical text form of the AST.
//!
//! [`print`] renders a document back to GraphQL source with standard
//! formatting: two-space indentation, one definition per blank-line
//! separated block, single spaces between clauses. Printing then re-parsing
//! yields a structurally identical tree (modulo spans), which is what makes
//! the projection in [`mapping`](crate::mapping) a usable idempotence
//! witness.

use crate::ast;

/// Renders a document to canonical GraphQL text.
pub fn print(document: &ast::Document<'_>) -> String {
    let mut printer = Printer::new();
    printer.print_document(document);
    printer.output
}

/// Renders a single value to canonical GraphQL text.
pub fn print_value(value: &ast::Value<'_>) -> String {
    let mut printer = Printer::new();
    printer.print_value(value);
    printer.output
}

/// Renders a single type reference to canonical GraphQL text.
pub fn print_type(ty: &ast::Type<'_>) -> String {
    let mut printer = Printer::new();
    printer.print_type(ty);
    printer.output
}

struct Printer {
    output: String,
    indent: usize,
}

impl Printer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    fn push_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
    }

    fn print_document(&mut self, document: &ast::Document<'_>) {
        for (i, definition) in document.definitions.iter().enumerate() {
            if i > 0 {
                self.output.push_str("\n\n");
            }
            self.print_definition(definition);
        }
        self.output.push('\n');
    }

    fn print_definition(&mut self, definition: &ast::Definition<'_>) {
        match definition {
            ast::Definition::Operation(d) => self.print_operation(d),
            ast::Definition::Fragment(d) => self.print_fragment(d),
            ast::Definition::Schema(d) => self.print_schema(d),
            ast::Definition::Type(d) => self.print_type_definition(d),
            ast::Definition::Directive(d) => self.print_directive_definition(d),
            ast::Definition::SchemaExtension(d) => self.print_schema_extension(d),
            ast::Definition::TypeExtension(d) => self.print_type_extension(d),
        }
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn print_operation(&mut self, operation: &ast::OperationDefinition<'_>) {
        let shorthand = operation.operation == ast::OperationKind::Query
            && operation.name.is_none()
            && operation.variable_definitions.is_empty()
            && operation.directives.is_empty();

        if !shorthand {
            self.output.push_str(operation.operation.as_str());
            if let Some(name) = &operation.name {
                self.output.push(' ');
                self.output.push_str(&name.value);
            }
            if !operation.variable_definitions.is_empty() {
                self.output.push('(');
                for (i, def) in operation.variable_definitions.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.print_variable_definition(def);
                }
                self.output.push(')');
            }
            self.print_directives(&operation.directives);
            self.output.push(' ');
        }
        self.print_selection_set(&operation.selection_set);
    }

    fn print_variable_definition(&mut self, def: &ast::VariableDefinition<'_>) {
        self.output.push('$');
        self.output.push_str(&def.variable.name.value);
        self.output.push_str(": ");
        self.print_type(&def.ty);
        if let Some(default) = &def.default_value {
            self.output.push_str(" = ");
            self.print_value(default);
        }
        self.print_directives(&def.directives);
    }

    fn print_fragment(&mut self, fragment: &ast::FragmentDefinition<'_>) {
        self.output.push_str("fragment ");
        self.output.push_str(&fragment.name.value);
        self.output.push_str(" on ");
        self.output.push_str(&fragment.type_condition.name.value);
        self.print_directives(&fragment.directives);
        self.output.push(' ');
        self.print_selection_set(&fragment.selection_set);
    }

    fn print_selection_set(&mut self, selection_set: &ast::SelectionSet<'_>) {
        self.output.push_str("{\n");
        self.indent += 1;
        for selection in &selection_set.selections {
            self.push_indent();
            self.print_selection(selection);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.push_indent();
        self.output.push('}');
    }

    fn print_selection(&mut self, selection: &ast::Selection<'_>) {
        match selection {
            ast::Selection::Field(field) => self.print_field(field),
            ast::Selection::FragmentSpread(spread) => {
                self.output.push_str("...");
                self.output.push_str(&spread.name.value);
                self.print_directives(&spread.directives);
            }
            ast::Selection::InlineFragment(inline) => {
                self.output.push_str("...");
                if let Some(condition) = &inline.type_condition {
                    self.output.push_str(" on ");
                    self.output.push_str(&condition.name.value);
                }
                self.print_directives(&inline.directives);
                self.output.push(' ');
                self.print_selection_set(&inline.selection_set);
            }
        }
    }

    fn print_field(&mut self, field: &ast::Field<'_>) {
        if let Some(alias) = &field.alias {
            self.output.push_str(&alias.value);
            self.output.push_str(": ");
        }
        self.output.push_str(&field.name.value);
        self.print_arguments(&field.arguments);
        self.print_directives(&field.directives);
        if let Some(selection_set) = &field.selection_set {
            self.output.push(' ');
            self.print_selection_set(selection_set);
        }
    }

    fn print_arguments(&mut self, arguments: &[ast::Argument<'_>]) {
        if arguments.is_empty() {
            return;
        }
        self.output.push('(');
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.output.push_str(&argument.name.value);
            self.output.push_str(": ");
            self.print_value(&argument.value);
        }
        self.output.push(')');
    }

    fn print_directives(&mut self, directives: &[ast::Directive<'_>]) {
        for directive in directives {
            self.output.push_str(" @");
            self.output.push_str(&directive.name.value);
            self.print_arguments(&directive.arguments);
        }
    }

    // =========================================================================
    // Values and types
    // =========================================================================

    fn print_value(&mut self, value: &ast::Value<'_>) {
        match value {
            ast::Value::Variable(v) => {
                self.output.push('$');
                self.output.push_str(&v.name.value);
            }
            ast::Value::Int(v) => {
                self.output.push_str(&v.value.to_string());
            }
            // Debug formatting round-trips f64 and always keeps a `.` or an
            // exponent, so the literal re-lexes as a float.
            ast::Value::Float(v) => {
                self.output.push_str(&format!("{:?}", v.value));
            }
            ast::Value::String(v) => self.print_string_literal(&v.value),
            ast::Value::Boolean(v) => {
                self.output.push_str(if v.value { "true" } else { "false" });
            }
            ast::Value::Null(_) => self.output.push_str("null"),
            ast::Value::Enum(v) => self.output.push_str(&v.value),
            ast::Value::List(v) => {
                self.output.push('[');
                for (i, item) in v.values.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.print_value(item);
                }
                self.output.push(']');
            }
            ast::Value::Object(v) => {
                self.output.push('{');
                for (i, field) in v.fields.iter().enumerate() {
                    if i > 0 {
                        self.output.push(',');
                    }
                    self.output.push(' ');
                    self.output.push_str(&field.name.value);
                    self.output.push_str(": ");
                    self.print_value(&field.value);
                }
                if !v.fields.is_empty() {
                    self.output.push(' ');
                }
                self.output.push('}');
            }
        }
    }

    fn print_string_literal(&mut self, value: &str) {
        self.output.push('"');
        for ch in value.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    self.output.push_str(&format!("\\u{:04X}", c as u32));
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }

    fn print_type(&mut self, ty: &ast::Type<'_>) {
        match ty {
            ast::Type::Named(t) => self.output.push_str(&t.name.value),
            ast::Type::List(t) => {
                self.output.push('[');
                self.print_type(&t.ty);
                self.output.push(']');
            }
            ast::Type::NonNull(t) => {
                self.print_type(&t.ty);
                self.output.push('!');
            }
        }
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn print_description(&mut self, description: &Option<ast::StringValue<'_>>) {
        if let Some(description) = description {
            self.push_indent();
            self.print_string_literal(&description.value);
            self.output.push('\n');
        }
    }

    fn print_schema(&mut self, schema: &ast::SchemaDefinition<'_>) {
        self.output.push_str("schema");
        self.print_directives(&schema.directives);
        self.output.push_str(" {\n");
        self.indent += 1;
        for operation_type in &schema.operation_types {
            self.push_indent();
            self.print_operation_type(operation_type);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.output.push('}');
    }

    fn print_operation_type(&mut self, operation_type: &ast::OperationTypeDefinition<'_>) {
        self.output.push_str(operation_type.operation.as_str());
        self.output.push_str(": ");
        self.output.push_str(&operation_type.named_type.name.value);
    }

    fn print_type_definition(&mut self, definition: &ast::TypeDefinition<'_>) {
        match definition {
            ast::TypeDefinition::Scalar(d) => {
                self.print_description(&d.description);
                self.output.push_str("scalar ");
                self.output.push_str(&d.name.value);
                self.print_directives(&d.directives);
            }
            ast::TypeDefinition::Object(d) => {
                self.print_description(&d.description);
                self.output.push_str("type ");
                self.output.push_str(&d.name.value);
                self.print_implements(&d.interfaces);
                self.print_directives(&d.directives);
                self.print_fields_block(&d.fields);
            }
            ast::TypeDefinition::Interface(d) => {
                self.print_description(&d.description);
                self.output.push_str("interface ");
                self.output.push_str(&d.name.value);
                self.print_directives(&d.directives);
                self.print_fields_block(&d.fields);
            }
            ast::TypeDefinition::Union(d) => {
                self.print_description(&d.description);
                self.output.push_str("union ");
                self.output.push_str(&d.name.value);
                self.print_directives(&d.directives);
                self.print_union_members(&d.types);
            }
            ast::TypeDefinition::Enum(d) => {
                self.print_description(&d.description);
                self.output.push_str("enum ");
                self.output.push_str(&d.name.value);
                self.print_directives(&d.directives);
                self.print_enum_values(&d.values);
            }
            ast::TypeDefinition::InputObject(d) => {
                self.print_description(&d.description);
                self.output.push_str("input ");
                self.output.push_str(&d.name.value);
                self.print_directives(&d.directives);
                self.print_input_fields_block(&d.fields);
            }
        }
    }

    fn print_implements(&mut self, interfaces: &[ast::NamedType<'_>]) {
        if interfaces.is_empty() {
            return;
        }
        self.output.push_str(" implements ");
        for (i, interface) in interfaces.iter().enumerate() {
            if i > 0 {
                self.output.push_str(" & ");
            }
            self.output.push_str(&interface.name.value);
        }
    }

    fn print_fields_block(&mut self, fields: &[ast::FieldDefinition<'_>]) {
        if fields.is_empty() {
            return;
        }
        self.output.push_str(" {\n");
        self.indent += 1;
        for field in fields {
            self.print_description(&field.description);
            self.push_indent();
            self.output.push_str(&field.name.value);
            self.print_input_values_inline(&field.arguments);
            self.output.push_str(": ");
            self.print_type(&field.ty);
            self.print_directives(&field.directives);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.output.push('}');
    }

    fn print_input_values_inline(&mut self, arguments: &[ast::InputValueDefinition<'_>]) {
        if arguments.is_empty() {
            return;
        }
        self.output.push('(');
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            if let Some(description) = &argument.description {
                self.print_string_literal(&description.value);
                self.output.push(' ');
            }
            self.print_input_value(argument);
        }
        self.output.push(')');
    }

    fn print_input_value(&mut self, value: &ast::InputValueDefinition<'_>) {
        self.output.push_str(&value.name.value);
        self.output.push_str(": ");
        self.print_type(&value.ty);
        if let Some(default) = &value.default_value {
            self.output.push_str(" = ");
            self.print_value(default);
        }
        self.print_directives(&value.directives);
    }

    fn print_input_fields_block(&mut self, fields: &[ast::InputValueDefinition<'_>]) {
        if fields.is_empty() {
            return;
        }
        self.output.push_str(" {\n");
        self.indent += 1;
        for field in fields {
            self.print_description(&field.description);
            self.push_indent();
            self.print_input_value(field);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.output.push('}');
    }

    fn print_union_members(&mut self, types: &[ast::NamedType<'_>]) {
        if types.is_empty() {
            return;
        }
        self.output.push_str(" = ");
        for (i, member) in types.iter().enumerate() {
            if i > 0 {
                self.output.push_str(" | ");
            }
            self.output.push_str(&member.name.value);
        }
    }

    fn print_enum_values(&mut self, values: &[ast::EnumValueDefinition<'_>]) {
        if values.is_empty() {
            return;
        }
        self.output.push_str(" {\n");
        self.indent += 1;
        for value in values {
            self.print_description(&value.description);
            self.push_indent();
            self.output.push_str(&value.name.value);
            self.print_directives(&value.directives);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.output.push('}');
    }

    fn print_directive_definition(&mut self, definition: &ast::DirectiveDefinition<'_>) {
        self.print_description(&definition.description);
        self.output.push_str("directive @");
        self.output.push_str(&definition.name.value);
        self.print_input_values_inline(&definition.arguments);
        if definition.repeatable {
            self.output.push_str(" repeatable");
        }
        self.output.push_str(" on ");
        for (i, location) in definition.locations.iter().enumerate() {
            if i > 0 {
                self.output.push_str(" | ");
            }
            self.output.push_str(location.as_str());
        }
    }

    // =========================================================================
    // Type system extensions
    // =========================================================================

    fn print_schema_extension(&mut self, extension: &ast::SchemaExtension<'_>) {
        self.output.push_str("extend schema");
        self.print_directives(&extension.directives);
        if !extension.operation_types.is_empty() {
            self.output.push_str(" {\n");
            self.indent += 1;
            for operation_type in &extension.operation_types {
                self.push_indent();
                self.print_operation_type(operation_type);
                self.output.push('\n');
            }
            self.indent -= 1;
            self.output.push('}');
        }
    }

    fn print_type_extension(&mut self, extension: &ast::TypeExtension<'_>) {
        self.output.push_str("extend ");
        match extension {
            ast::TypeExtension::Scalar(e) => {
                self.output.push_str("scalar ");
                self.output.push_str(&e.name.value);
                self.print_directives(&e.directives);
            }
            ast::TypeExtension::Object(e) => {
                self.output.push_str("type ");
                self.output.push_str(&e.name.value);
                self.print_implements(&e.interfaces);
                self.print_directives(&e.directives);
                self.print_fields_block(&e.fields);
            }
            ast::TypeExtension::Interface(e) => {
                self.output.push_str("interface ");
                self.output.push_str(&e.name.value);
                self.print_directives(&e.directives);
                self.print_fields_block(&e.fields);
            }
            ast::TypeExtension::Union(e) => {
                self.output.push_str("union ");
                self.output.push_str(&e.name.value);
                self.print_directives(&e.directives);
                self.print_union_members(&e.types);
            }
            ast::TypeExtension::Enum(e) => {
                self.output.push_str("enum ");
                self.output.push_str(&e.name.value);
                self.print_directives(&e.directives);
                self.print_enum_values(&e.values);
            }
            ast::TypeExtension::InputObject(e) => {
                self.output.push_str("input ");
                self.output.push_str(&e.name.value);
                self.print_directives(&e.directives);
                self.print_input_fields_block(&e.fields);
            }
        }
    }
}
